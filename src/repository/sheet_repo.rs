// ==========================================
// 空运提单跟踪 - 表格仓储
// ==========================================
// 职责: 远程行 ↔ 规范记录；读失败降级为空列表，写结果以 WriteOutcome 返回
// 红线: 不向上层抛出远程错误
// ==========================================

use crate::mapping::{new_record_id, EntityMapper, MappingDiagnostics, ShipmentMapper, UserMapper};
use crate::repository::sheet_store::{SaveOutcome, SheetStore, WriteOutcome, WriteRequest};
use serde_json::Value;
use std::sync::Arc;

// ==========================================
// SheetRepository - 单表仓储
// ==========================================
pub struct SheetRepository<M: EntityMapper> {
    mapper: M,
    store: Arc<dyn SheetStore>,
}

pub type ShipmentRepository = SheetRepository<ShipmentMapper>;
pub type UserRepository = SheetRepository<UserMapper>;

impl ShipmentRepository {
    pub fn shipments(store: Arc<dyn SheetStore>) -> Self {
        Self::new(ShipmentMapper, store)
    }
}

impl UserRepository {
    pub fn users(store: Arc<dyn SheetStore>) -> Self {
        Self::new(UserMapper, store)
    }
}

impl<M: EntityMapper> SheetRepository<M> {
    pub fn new(mapper: M, store: Arc<dyn SheetStore>) -> Self {
        Self { mapper, store }
    }

    /// 远程表格名
    pub fn sheet(&self) -> &'static str {
        self.mapper.kind().sheet_name()
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_configured()
    }

    /// 读取全部记录；任何失败都降级为空列表
    pub async fn list(&self) -> Vec<M::Record> {
        self.list_with_diagnostics().await.0
    }

    /// 读取全部记录并返回映射诊断
    pub async fn list_with_diagnostics(&self) -> (Vec<M::Record>, MappingDiagnostics) {
        let mut diagnostics = MappingDiagnostics::default();
        let sheet = self.sheet();

        if !self.store.is_configured() {
            tracing::warn!(sheet, "远程端点未配置，返回空列表");
            return (Vec::new(), diagnostics);
        }

        let records = match self.store.fetch_rows(sheet).await {
            Ok(rows) => self.mapper.map_rows(&rows, &mut diagnostics),
            Err(e) => {
                tracing::error!(sheet, error = %e, "读取远程表格失败，降级为空列表");
                Vec::new()
            }
        };
        diagnostics.log_summary(sheet);
        (records, diagnostics)
    }

    /// 保存记录；没有标识时先生成
    pub async fn save(&self, mut record: M::Record) -> SaveOutcome<M::Record> {
        if self.mapper.record_id(&record).trim().is_empty() {
            self.mapper.assign_id(&mut record, new_record_id());
        }

        if !self.store.is_configured() {
            tracing::warn!(sheet = self.sheet(), "远程端点未配置，跳过保存");
            return SaveOutcome {
                record,
                outcome: WriteOutcome::Skipped,
            };
        }

        let outcome = match self.mapper.to_external(&record) {
            Ok(row) => {
                let request = WriteRequest::save(self.sheet(), Value::Object(row));
                self.submit(&request).await
            }
            Err(e) => WriteOutcome::Failed(e.to_string()),
        };

        SaveOutcome { record, outcome }
    }

    /// 按标识删除
    pub async fn delete(&self, id: &str) -> WriteOutcome {
        let id = id.trim();
        if id.is_empty() {
            return WriteOutcome::Failed("记录标识为空".to_string());
        }

        if !self.store.is_configured() {
            tracing::warn!(sheet = self.sheet(), id, "远程端点未配置，跳过删除");
            return WriteOutcome::Skipped;
        }

        self.submit(&WriteRequest::delete(self.sheet(), id)).await
    }

    async fn submit(&self, request: &WriteRequest) -> WriteOutcome {
        match self.store.post(request).await {
            Ok(()) => WriteOutcome::Ok,
            Err(e) => {
                tracing::error!(sheet = %request.sheet, action = ?request.action, error = %e, "写请求失败");
                WriteOutcome::Failed(e.to_string())
            }
        }
    }
}
