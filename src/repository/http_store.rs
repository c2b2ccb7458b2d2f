// ==========================================
// 空运提单跟踪 - HTTP 表格存储
// ==========================================
// 协议:
// - 读: GET <base>?sheet=<名称>，响应体为对象数组
// - 写: POST <base>，JSON 信封 {action, sheet, data}
// ==========================================

use crate::config::StoreConfig;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::sheet_store::{SheetStore, WriteRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

pub struct HttpSheetStore {
    client: Client,
    config: StoreConfig,
}

impl HttpSheetStore {
    pub fn new(config: StoreConfig) -> RepositoryResult<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    /// 读请求：在基础地址的已有查询串后追加 sheet 参数
    fn read_request(&self, sheet: &str) -> RepositoryResult<reqwest::Request> {
        Ok(self
            .client
            .get(&self.config.base_url)
            .query(&[("sheet", sheet)])
            .build()?)
    }
}

/// 解析读响应；非数组视为空表
pub fn parse_rows(body: &str) -> RepositoryResult<Vec<Value>> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(rows) => Ok(rows),
        other => {
            tracing::warn!(kind = json_kind(&other), "读响应不是数组，按空表处理");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl SheetStore for HttpSheetStore {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn fetch_rows(&self, sheet: &str) -> RepositoryResult<Vec<Value>> {
        if !self.is_configured() {
            return Err(RepositoryError::NotConfigured);
        }

        let request = self.read_request(sheet)?;
        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let rows = parse_rows(&body)?;
        tracing::debug!(sheet, rows = rows.len(), "读取远程表格完成");
        Ok(rows)
    }

    async fn post(&self, request: &WriteRequest) -> RepositoryResult<()> {
        if !self.is_configured() {
            return Err(RepositoryError::NotConfigured);
        }

        let response = self
            .client
            .post(&self.config.base_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::HttpStatus {
                status: status.as_u16(),
            });
        }

        tracing::debug!(sheet = %request.sheet, action = ?request.action, "写请求已提交");
        Ok(())
    }
}
