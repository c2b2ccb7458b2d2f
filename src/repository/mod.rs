// ==========================================
// 空运提单跟踪 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 远程表格读写，屏蔽传输与映射细节
// ==========================================

pub mod error;
pub mod http_store;
pub mod sheet_repo;
pub mod sheet_store;

pub use error::{RepositoryError, RepositoryResult};
pub use http_store::{parse_rows, HttpSheetStore};
pub use sheet_repo::{SheetRepository, ShipmentRepository, UserRepository};
pub use sheet_store::{SaveOutcome, SheetStore, WriteAction, WriteOutcome, WriteRequest};
