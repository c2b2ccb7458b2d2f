// ==========================================
// 空运提单跟踪 - API 层
// ==========================================
// 职责: 面向界面/命令行的业务接口
// 红线: 读操作不返回错误；写操作返回 WriteOutcome
// ==========================================

pub mod auth_api;
pub mod error;
pub mod tracking_api;
pub mod user_api;

pub use auth_api::{authenticate, AuthApi};
pub use error::{ApiError, ApiResult};
pub use tracking_api::TrackingApi;
pub use user_api::UserApi;
