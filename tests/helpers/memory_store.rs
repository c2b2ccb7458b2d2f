// ==========================================
// 内存表格存储 - 用于集成测试
// ==========================================
// SAVE 按 ID 覆盖或追加，DELETE 按 id 删除；记录所有写请求
// ==========================================

use async_trait::async_trait;
use awb_tracker::repository::{
    RepositoryError, RepositoryResult, SheetStore, WriteAction, WriteRequest,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemorySheetStore {
    configured: bool,
    fail_reads: bool,
    fail_writes: bool,
    sheets: Mutex<HashMap<String, Vec<Value>>>,
    posted: Mutex<Vec<WriteRequest>>,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self {
            configured: true,
            ..Default::default()
        }
    }

    /// 模拟未配置端点
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn with_rows(self, sheet: &str, rows: Vec<Value>) -> Self {
        self.sheets.lock().unwrap().insert(sheet.to_string(), rows);
        self
    }

    pub fn rows(&self, sheet: &str) -> Vec<Value> {
        self.sheets
            .lock()
            .unwrap()
            .get(sheet)
            .cloned()
            .unwrap_or_default()
    }

    pub fn posted(&self) -> Vec<WriteRequest> {
        self.posted.lock().unwrap().clone()
    }

    fn row_id(row: &Value) -> Option<&str> {
        row.get("ID").or_else(|| row.get("id")).and_then(Value::as_str)
    }
}

#[async_trait]
impl SheetStore for MemorySheetStore {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn fetch_rows(&self, sheet: &str) -> RepositoryResult<Vec<Value>> {
        if self.fail_reads {
            return Err(RepositoryError::Transport("connection reset".to_string()));
        }
        Ok(self.rows(sheet))
    }

    async fn post(&self, request: &WriteRequest) -> RepositoryResult<()> {
        self.posted.lock().unwrap().push(request.clone());
        if self.fail_writes {
            return Err(RepositoryError::HttpStatus { status: 500 });
        }

        let mut sheets = self.sheets.lock().unwrap();
        let rows = sheets.entry(request.sheet.clone()).or_default();
        let id = Self::row_id(&request.data).map(str::to_string);

        match request.action {
            WriteAction::Save => match rows
                .iter_mut()
                .find(|row| Self::row_id(row) == id.as_deref())
            {
                Some(existing) => *existing = request.data.clone(),
                None => rows.push(request.data.clone()),
            },
            WriteAction::Delete => rows.retain(|row| Self::row_id(row) != id.as_deref()),
        }
        Ok(())
    }
}
