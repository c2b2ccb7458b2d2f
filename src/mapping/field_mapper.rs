// ==========================================
// 空运提单跟踪 - 字段映射器实现
// ==========================================
// 职责: 外部行（大小写/重音不一、多列文档） ↔ 规范记录
// 依据: field_table 中的别名表；状态经 status_normalizer，
//       文档经 document_packer
// ==========================================

use crate::domain::shipment::ShipmentRecord;
use crate::domain::types::{AccountState, UserRole};
use crate::domain::user::UserAccount;
use crate::mapping::data_cleaner::{DataCleaner, ExternalRow};
use crate::mapping::diagnostics::MappingDiagnostics;
use crate::mapping::document_packer::{
    is_document_link, pack, pack_links, slot_header, unpack, DOCUMENT_SLOT_COUNT,
};
use crate::mapping::error::{MappingError, MappingResult};
use crate::mapping::field_table::{EntityKind, ShipmentField, UserField, ID_ALIASES, ID_HEADER};
use crate::mapping::mapper_trait::EntityMapper;
use crate::mapping::status_normalizer::classify_status;
use serde_json::Value;
use uuid::Uuid;

/// 生成新的记录标识（高熵随机串，不要求密码学安全）
pub fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn put(row: &mut ExternalRow, header: &str, value: &str) {
    row.insert(header.to_string(), Value::String(value.to_string()));
}

fn read_id(cleaner: &DataCleaner, row: &ExternalRow, diagnostics: &mut MappingDiagnostics) -> String {
    let id = cleaner.text_or_empty(row, ID_ALIASES);
    if id.trim().is_empty() {
        diagnostics.missing_ids += 1;
    }
    id
}

// ==========================================
// ShipmentMapper - 运单映射
// ==========================================
pub struct ShipmentMapper;

impl ShipmentMapper {
    /// 读取文档链接：优先 PDF_1..PDF_11，全部为空时回退到已打包的 Documentos 列
    fn read_documents(
        &self,
        cleaner: &DataCleaner,
        row: &ExternalRow,
        diagnostics: &mut MappingDiagnostics,
    ) -> Vec<String> {
        let slots: Vec<Option<String>> = (1..=DOCUMENT_SLOT_COUNT)
            .map(|slot| cleaner.first_present(row, &[slot_header(slot).as_str()]))
            .collect();

        diagnostics.dropped_documents += slots
            .iter()
            .flatten()
            .filter(|value| !is_document_link(value))
            .count();

        let packed = pack(&slots);
        if !packed.is_empty() {
            return unpack(&packed);
        }

        let stored = cleaner.text_or_empty(row, ShipmentField::Documents.aliases());
        let (links, dropped): (Vec<String>, Vec<String>) =
            unpack(&stored).into_iter().partition(|s| is_document_link(s));
        diagnostics.dropped_documents += dropped.len();
        links
    }

    fn external_value(record: &ShipmentRecord, field: ShipmentField) -> String {
        match field {
            ShipmentField::Supplier => record.supplier.clone(),
            ShipmentField::DispatchDate => record.dispatch_date.clone(),
            ShipmentField::InvoiceRefs => record.invoice_refs.clone(),
            ShipmentField::WaybillNumber => record.waybill_number.clone(),
            ShipmentField::Status => record.status.sheet_label().to_string(),
            ShipmentField::ArrivalDate => record.arrival_date.clone(),
            ShipmentField::Brand => record.brand.clone(),
            ShipmentField::Material => record.material.clone(),
            ShipmentField::Remark => record.remark.clone(),
            ShipmentField::TrackingUrl => record.tracking_url.clone(),
            ShipmentField::Documents => pack_links(&record.documents),
        }
    }
}

impl EntityMapper for ShipmentMapper {
    type Record = ShipmentRecord;

    fn kind(&self) -> EntityKind {
        EntityKind::Shipment
    }

    fn record_id<'a>(&self, record: &'a ShipmentRecord) -> &'a str {
        &record.id
    }

    fn assign_id(&self, record: &mut ShipmentRecord, id: String) {
        record.id = id;
    }

    fn to_canonical_with(
        &self,
        row: &ExternalRow,
        diagnostics: &mut MappingDiagnostics,
    ) -> ShipmentRecord {
        let cleaner = DataCleaner;
        diagnostics.rows += 1;

        let id = read_id(&cleaner, row, diagnostics);
        let text = |field: ShipmentField| cleaner.text_or_empty(row, field.aliases());

        let status_match = classify_status(&text(ShipmentField::Status));
        if status_match.is_coerced() {
            diagnostics.coerced_statuses += 1;
        }

        let documents = self.read_documents(&cleaner, row, diagnostics);

        ShipmentRecord {
            id,
            supplier: text(ShipmentField::Supplier),
            dispatch_date: text(ShipmentField::DispatchDate),
            invoice_refs: text(ShipmentField::InvoiceRefs),
            waybill_number: text(ShipmentField::WaybillNumber),
            status: status_match.status(),
            arrival_date: text(ShipmentField::ArrivalDate),
            brand: text(ShipmentField::Brand),
            material: text(ShipmentField::Material),
            remark: text(ShipmentField::Remark),
            tracking_url: text(ShipmentField::TrackingUrl),
            documents,
        }
    }

    fn to_external(&self, record: &ShipmentRecord) -> MappingResult<ExternalRow> {
        if !record.has_id() {
            return Err(MappingError::MissingIdentifier {
                entity: self.kind().entity_name(),
            });
        }

        let mut row = ExternalRow::new();
        put(&mut row, ID_HEADER, &record.id);
        for field in ShipmentField::ALL {
            put(&mut row, field.sheet_header(), &Self::external_value(record, field));
        }
        Ok(row)
    }
}

// ==========================================
// UserMapper - 用户映射
// ==========================================
pub struct UserMapper;

impl EntityMapper for UserMapper {
    type Record = UserAccount;

    fn kind(&self) -> EntityKind {
        EntityKind::User
    }

    fn record_id<'a>(&self, record: &'a UserAccount) -> &'a str {
        &record.id
    }

    fn assign_id(&self, record: &mut UserAccount, id: String) {
        record.id = id;
    }

    fn to_canonical_with(&self, row: &ExternalRow, diagnostics: &mut MappingDiagnostics) -> UserAccount {
        let cleaner = DataCleaner;
        diagnostics.rows += 1;

        let id = read_id(&cleaner, row, diagnostics);
        let text = |field: UserField| cleaner.text_or_empty(row, field.aliases());

        UserAccount {
            id,
            name: text(UserField::Name),
            email: text(UserField::Email),
            password: text(UserField::Password),
            role: UserRole::from_sheet(&text(UserField::Role)),
            state: AccountState::from_sheet(&text(UserField::State)),
        }
    }

    fn to_external(&self, record: &UserAccount) -> MappingResult<ExternalRow> {
        if record.id.trim().is_empty() {
            return Err(MappingError::MissingIdentifier {
                entity: self.kind().entity_name(),
            });
        }

        let mut row = ExternalRow::new();
        put(&mut row, ID_HEADER, &record.id);
        put(&mut row, UserField::Name.sheet_header(), &record.name);
        put(&mut row, UserField::Email.sheet_header(), &record.email);
        put(&mut row, UserField::Password.sheet_header(), &record.password);
        put(&mut row, UserField::Role.sheet_header(), record.role.to_sheet_str());
        put(&mut row, UserField::State.sheet_header(), record.state.to_sheet_str());
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AwbStatus;
    use serde_json::json;

    fn row(value: Value) -> ExternalRow {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_shipment_mapper_localized_headers() {
        let r = row(json!({
            "ID": "abc123",
            "Fornecedor": "ACME Ltda",
            "Saída": "2024-03-05",
            "NF's": "NF 10",
            "AWB": 1234567890,
            "Status": "Entregue",
            "Marca": "Nike",
            "Observação": "frágil",
            "PDF_1": "http://docs/1.pdf",
        }));

        let record = ShipmentMapper.to_canonical(&r);

        assert_eq!(record.id, "abc123");
        assert_eq!(record.supplier, "ACME Ltda");
        assert_eq!(record.dispatch_date, "2024-03-05");
        assert_eq!(record.invoice_refs, "NF 10");
        assert_eq!(record.waybill_number, "1234567890");
        assert_eq!(record.status, AwbStatus::Delivered);
        assert_eq!(record.brand, "Nike");
        assert_eq!(record.remark, "frágil");
        assert_eq!(record.documents, vec!["http://docs/1.pdf".to_string()]);
    }

    #[test]
    fn test_shipment_mapper_internal_keys_and_defaults() {
        let r = row(json!({"id": "x1", "fornecedor": "Beta", "awbNumber": "999"}));

        let record = ShipmentMapper.to_canonical(&r);

        assert_eq!(record.id, "x1");
        assert_eq!(record.supplier, "Beta");
        assert_eq!(record.waybill_number, "999");
        assert_eq!(record.material, "");
        assert_eq!(record.tracking_url, "");
        assert_eq!(record.status, AwbStatus::InTransit);
        assert!(record.documents.is_empty());
    }

    #[test]
    fn test_external_id_wins_over_internal() {
        let r = row(json!({"ID": "EXT", "id": "int"}));
        assert_eq!(ShipmentMapper.to_canonical(&r).id, "EXT");
    }

    #[test]
    fn test_documents_slots_and_fallback() {
        let r = row(json!({
            "PDF_1": null,
            "PDF_2": "http://a",
            "PDF_3": "ftp://b",
            "PDF_4": "http://c",
            "Documentos": "http://ignored",
        }));
        let mut diag = MappingDiagnostics::default();
        let record = ShipmentMapper.to_canonical_with(&r, &mut diag);
        assert_eq!(record.documents, vec!["http://a", "http://c"]);
        assert_eq!(diag.dropped_documents, 1);

        let r = row(json!({"Documentos": "http://x|nota|https://y"}));
        let mut diag = MappingDiagnostics::default();
        let record = ShipmentMapper.to_canonical_with(&r, &mut diag);
        assert_eq!(record.documents, vec!["http://x", "https://y"]);
        assert_eq!(diag.dropped_documents, 1);
    }

    #[test]
    fn test_diagnostics_count_coercions() {
        let r = row(json!({"Status": "Extraviado"}));
        let mut diag = MappingDiagnostics::default();
        let record = ShipmentMapper.to_canonical_with(&r, &mut diag);
        assert_eq!(record.status, AwbStatus::InTransit);
        assert_eq!(diag.coerced_statuses, 1);
        assert_eq!(diag.missing_ids, 1);
        assert_eq!(diag.rows, 1);
    }

    #[test]
    fn test_shipment_to_external_uses_sheet_headers() {
        let record = ShipmentRecord {
            id: "id-1".to_string(),
            supplier: "ACME".to_string(),
            dispatch_date: "2024-01-31".to_string(),
            status: AwbStatus::PartiallyCollected,
            remark: "ok".to_string(),
            documents: vec!["http://a".to_string(), "http://b".to_string()],
            ..Default::default()
        };

        let external = ShipmentMapper.to_external(&record).unwrap();

        assert_eq!(external["ID"], json!("id-1"));
        assert_eq!(external["Fornecedor"], json!("ACME"));
        assert_eq!(external["Saída"], json!("2024-01-31"));
        assert_eq!(external["Status"], json!("Coletado Parcial"));
        assert_eq!(external["Observação"], json!("ok"));
        assert_eq!(external["Documentos"], json!("http://a|http://b"));
        assert_eq!(external["NF's"], json!(""));
        assert!(!external.contains_key("fornecedor"));
    }

    #[test]
    fn test_shipment_round_trip() {
        let r = row(json!({
            "ID": "r1",
            "Fornecedor": "ACME",
            "Status": "atrasado",
            "Chegada": "2024-02-10",
            "PDF_5": "https://d/5",
        }));
        let first = ShipmentMapper.to_canonical(&r);
        let external = ShipmentMapper.to_external(&first).unwrap();
        let second = ShipmentMapper.to_canonical(&external);
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_external_requires_id() {
        let err = ShipmentMapper.to_external(&ShipmentRecord::default()).unwrap_err();
        assert_eq!(err, MappingError::MissingIdentifier { entity: "shipment" });
    }

    #[test]
    fn test_user_mapper() {
        let r = row(json!({
            "ID": 7,
            "USUÁRIO": "Ana",
            "E-MAIL": "Ana@Empresa.com",
            "SENHA": "s3nha",
            "PAPEL": "Admin",
            "status": "inativo",
        }));

        let user = UserMapper.to_canonical(&r);

        assert_eq!(user.id, "7");
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "Ana@Empresa.com");
        assert_eq!(user.password, "s3nha");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.state, AccountState::Inactive);

        let external = UserMapper.to_external(&user).unwrap();
        assert_eq!(external["USUÁRIO"], json!("Ana"));
        assert_eq!(external["E-MAIL"], json!("Ana@Empresa.com"));
        assert_eq!(external["PAPEL"], json!("admin"));
        assert_eq!(external["status"], json!("inativo"));
        assert_eq!(UserMapper.to_canonical(&external), user);
    }

    #[test]
    fn test_map_rows_skips_non_objects() {
        let rows = vec![json!({"ID": "a"}), json!("lixo"), json!({"ID": "b"})];
        let mut diag = MappingDiagnostics::default();
        let records = ShipmentMapper.map_rows(&rows, &mut diag);
        assert_eq!(records.len(), 2);
        assert_eq!(diag.skipped_rows, 1);
        assert_eq!(diag.rows, 2);
    }

    #[test]
    fn test_new_record_id_is_unique() {
        let a = new_record_id();
        let b = new_record_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }
}
