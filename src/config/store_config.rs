// ==========================================
// 空运提单跟踪 - 远程表格端点配置
// ==========================================
// 职责: 描述一次会话使用的端点、超时与写后重载延迟
// 解析顺序: 本地覆写 > 构建期 AWB_API_URL > 内置默认
// ==========================================

use std::time::Duration;

/// 内置默认端点
pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbw8oPODBtBwUuQr9iMZhWCKBOIq9qxtHF7rDGT7qI072i7lAr2JTBwZBPXhbJFivV2J/exec";

/// 构建期注入的端点（可选）
pub const BUILD_API_URL: Option<&str> = option_env!("AWB_API_URL");

/// 默认请求超时（毫秒）
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

/// 写操作后重新加载前的等待（毫秒）
pub const DEFAULT_RELOAD_DELAY_MS: u64 = 1_500;

// ==========================================
// StoreConfig - 端点配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub reload_delay: Duration,
}

impl StoreConfig {
    /// 使用默认超时与延迟创建
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim().to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            reload_delay: Duration::from_millis(DEFAULT_RELOAD_DELAY_MS),
        }
    }

    /// 未配置端点：所有读操作返回空，写操作跳过
    pub fn unconfigured() -> Self {
        Self::new("")
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_reload_delay(mut self, delay: Duration) -> Self {
        self.reload_delay = delay;
        self
    }

    /// 端点是否可用
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(resolve_base_url(None))
    }
}

/// 按优先级解析端点地址
///
/// 空白的覆写值视为未设置
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    [override_url, BUILD_API_URL]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}
