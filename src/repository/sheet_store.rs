// ==========================================
// 空运提单跟踪 - 远程表格存储 Trait
// ==========================================
// 职责: 定义读取整表与提交写请求的接口（不包含映射）
// 实现者: HttpSheetStore；测试中使用内存实现
// ==========================================

use crate::repository::error::RepositoryResult;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

// ==========================================
// 写请求
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WriteAction {
    Save,
    Delete,
}

/// 写请求信封: {action, sheet, data}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteRequest {
    pub action: WriteAction,
    pub sheet: String,
    pub data: Value,
}

impl WriteRequest {
    /// 保存（新增或按标识覆盖）
    pub fn save(sheet: &str, data: Value) -> Self {
        Self {
            action: WriteAction::Save,
            sheet: sheet.to_string(),
            data,
        }
    }

    /// 删除，data 仅携带标识
    pub fn delete(sheet: &str, id: &str) -> Self {
        Self {
            action: WriteAction::Delete,
            sheet: sheet.to_string(),
            data: json!({ "id": id }),
        }
    }
}

// ==========================================
// 写结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// 远程已接受
    Ok,
    /// 端点未配置，未发送
    Skipped,
    /// 发送失败（原因）
    Failed(String),
}

/// 保存结果：带上最终标识的记录
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome<T> {
    pub record: T,
    pub outcome: WriteOutcome,
}

// ==========================================
// SheetStore Trait
// ==========================================
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// 端点是否可用
    fn is_configured(&self) -> bool;

    /// 读取整张表的原始行
    ///
    /// # 返回
    /// - 响应体不是数组时返回空列表
    async fn fetch_rows(&self, sheet: &str) -> RepositoryResult<Vec<Value>>;

    /// 提交写请求
    async fn post(&self, request: &WriteRequest) -> RepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_envelope_shape() {
        let request = WriteRequest::save("AWB", json!({"ID": "a1"}));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"action": "SAVE", "sheet": "AWB", "data": {"ID": "a1"}})
        );
    }

    #[test]
    fn test_delete_envelope_carries_only_id() {
        let request = WriteRequest::delete("CADASTRO USUÁRIO", "u9");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"action": "DELETE", "sheet": "CADASTRO USUÁRIO", "data": {"id": "u9"}})
        );
    }
}
