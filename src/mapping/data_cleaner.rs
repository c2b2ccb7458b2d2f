// ==========================================
// 空运提单跟踪 - 外部值清洗
// ==========================================
// 职责: 外部行的任意类型值 → 文本；按别名顺序取第一个有效值
// 规则: null / 空字符串 / 嵌套结构视为缺失
// ==========================================

use serde_json::{Map, Value};

/// 外部行：任意键 → 任意类型值
pub type ExternalRow = Map<String, Value>;

pub struct DataCleaner;

impl DataCleaner {
    /// 单个值转文本（缺失返回 None）
    pub fn clean_value(&self, value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// 按别名顺序取第一个存在且非空的值
    pub fn first_present(&self, row: &ExternalRow, aliases: &[&str]) -> Option<String> {
        aliases
            .iter()
            .filter_map(|alias| row.get(*alias))
            .find_map(|value| self.clean_value(value))
    }

    /// 取文本字段，缺失时为空字符串
    pub fn text_or_empty(&self, row: &ExternalRow, aliases: &[&str]) -> String {
        self.first_present(row, aliases).unwrap_or_default()
    }
}
