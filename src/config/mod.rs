// ==========================================
// 空运提单跟踪 - 配置层
// ==========================================
// 职责: 端点解析与本地设置持久化
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod error;
pub mod store_config;

pub use config_manager::{config_keys, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use store_config::{
    resolve_base_url, StoreConfig, BUILD_API_URL, DEFAULT_API_URL, DEFAULT_RELOAD_DELAY_MS,
    DEFAULT_REQUEST_TIMEOUT_MS,
};
