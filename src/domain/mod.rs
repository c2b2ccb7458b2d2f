// ==========================================
// 空运提单跟踪 - 领域模型层
// ==========================================
// 职责: 定义领域实体与闭合枚举
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod filter;
pub mod report;
pub mod shipment;
pub mod types;
pub mod user;

// 重导出核心类型
pub use filter::FilterState;
pub use report::{LabelCount, ReportStats, StatusCount, TimelinePoint};
pub use shipment::ShipmentRecord;
pub use types::{AccountState, AwbStatus, DashboardPeriod, ReportWindow, UserRole};
pub use user::{normalize_email, UserAccount};
