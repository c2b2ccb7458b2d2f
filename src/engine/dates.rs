// ==========================================
// 空运提单跟踪 - 日期解析与展示
// ==========================================
// 表格中的日期可能是 ISO 日期、带时区的时间戳或 DD/MM/YYYY
// 展示格式固定为 DD/MM/YYYY（零填充），时间线与导出共用
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// 展示格式
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// 空日期的展示占位
pub const EMPTY_DATE_PLACEHOLDER: &str = "-";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y%m%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// 解析为日历日期；带时区的时间戳按 UTC 取日期
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        })
}

/// 日期 → DD/MM/YYYY
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// 原始日期文本 → 展示文本
///
/// - 空值或 "-" → "-"
/// - 无法解析 → 原样返回
pub fn format_display_date(raw: &str) -> String {
    if raw.trim().is_empty() || raw == EMPTY_DATE_PLACEHOLDER {
        return EMPTY_DATE_PLACEHOLDER.to_string();
    }
    parse_calendar_date(raw)
        .map(display_date)
        .unwrap_or_else(|| raw.to_string())
}

/// 原始日期文本 → 表单输入格式 YYYY-MM-DD（无法解析时为空）
pub fn to_input_date(raw: &str) -> String {
    parse_calendar_date(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
