// ==========================================
// 空运提单跟踪 - 导出格式化
// ==========================================
// 输出: 分号分隔文本，供电子表格导入
// 规则: BOM 前缀 + 固定表头 + 每条记录一行（保持输入顺序）
//       日期字段用 DD/MM/YYYY 展示，其余字段原样输出
// 已知限制: 不做引号转义，字段内含分号会导致列错位
// ==========================================

use crate::domain::shipment::ShipmentRecord;
use crate::engine::dates::format_display_date;
use crate::mapping::document_packer::pack_links;
use chrono::{DateTime, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use thiserror::Error;

/// 字节序标记（让电子表格工具识别 UTF-8）
pub const UTF8_BOM: &str = "\u{feff}";

/// 导出表头（固定顺序）
pub const EXPORT_HEADERS: [&str; 11] = [
    "Fornecedor",
    "Saida",
    "NFs",
    "AWB",
    "Status",
    "Chegada",
    "Marca",
    "Material",
    "Observacao",
    "Rastreio",
    "Documentos",
];

/// 导出错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("导出写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("导出格式化失败: {0}")]
    Csv(#[from] csv::Error),
}

/// 单条记录 → 导出行
pub fn export_row(record: &ShipmentRecord) -> [String; 11] {
    [
        record.supplier.clone(),
        format_display_date(&record.dispatch_date),
        record.invoice_refs.clone(),
        record.waybill_number.clone(),
        record.status.sheet_label().to_string(),
        format_display_date(&record.arrival_date),
        record.brand.clone(),
        record.material.clone(),
        record.remark.clone(),
        record.tracking_url.clone(),
        pack_links(&record.documents),
    ]
}

/// 写出导出内容（含 BOM）
pub fn write_export<W: Write>(mut writer: W, records: &[ShipmentRecord]) -> Result<(), ExportError> {
    writer.write_all(UTF8_BOM.as_bytes())?;

    let mut csv_writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(EXPORT_HEADERS)?;
    for record in records {
        csv_writer.write_record(export_row(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// 生成导出文本（不会失败；内存写入出错时返回空串并记录日志）
pub fn to_export_text(records: &[ShipmentRecord]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    match write_export(&mut buf, records) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(e) => {
            tracing::error!("导出文本生成失败: {}", e);
            String::new()
        }
    }
}

/// 导出文件名（带毫秒时间戳）
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("rastreamento_awb_{}.csv", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AwbStatus;
    use chrono::TimeZone;

    fn record() -> ShipmentRecord {
        ShipmentRecord {
            id: "1".to_string(),
            supplier: "ACME".to_string(),
            dispatch_date: "2024-01-31".to_string(),
            invoice_refs: "NF 1".to_string(),
            waybill_number: "957".to_string(),
            status: AwbStatus::Delivered,
            arrival_date: "".to_string(),
            brand: "Nike".to_string(),
            material: "Tecido".to_string(),
            remark: "".to_string(),
            tracking_url: "http://track".to_string(),
            documents: vec!["http://a".to_string(), "http://b".to_string()],
        }
    }

    #[test]
    fn test_export_starts_with_bom_and_header() {
        let text = to_export_text(&[]);
        assert!(text.starts_with(UTF8_BOM));
        let first_line = text.trim_start_matches(UTF8_BOM).lines().next().unwrap();
        assert_eq!(
            first_line,
            "Fornecedor;Saida;NFs;AWB;Status;Chegada;Marca;Material;Observacao;Rastreio;Documentos"
        );
    }

    #[test]
    fn test_export_row_formats_dates_and_keeps_raw_values() {
        let text = to_export_text(&[record()]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "ACME;31/01/2024;NF 1;957;Entregue;-;Nike;Tecido;;http://track;http://a|http://b"
        );
    }

    #[test]
    fn test_export_does_not_escape_delimiters() {
        let mut r = record();
        r.remark = "frágil; urgente".to_string();
        let text = to_export_text(&[r]);
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains("frágil; urgente"));
        assert!(!row.contains('"'));
        assert_eq!(row.split(';').count(), EXPORT_HEADERS.len() + 1);
    }

    #[test]
    fn test_export_preserves_input_order() {
        let mut a = record();
        a.supplier = "Z".to_string();
        let mut b = record();
        b.supplier = "A".to_string();
        let text = to_export_text(&[a, b]);
        let suppliers: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split(';').next().unwrap())
            .collect();
        assert_eq!(suppliers, vec!["Z", "A"]);
    }

    #[test]
    fn test_export_file_name() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(export_file_name(now), "rastreamento_awb_1700000000123.csv");
    }
}
