// ==========================================
// 空运提单跟踪 - 引擎层
// ==========================================
// 职责: 规范记录上的纯函数计算（筛选 / 统计 / 导出）
// 红线: 引擎不做 I/O，不重排输入
// ==========================================

pub mod analytics;
pub mod dates;
pub mod export;
pub mod query;

// 重导出核心引擎
pub use analytics::{AnalyticsEngine, BRAND_TOP_N, MATERIAL_TOP_N};
pub use dates::{format_display_date, parse_calendar_date, to_input_date};
pub use export::{export_file_name, to_export_text, write_export, ExportError};
pub use query::QueryEngine;
