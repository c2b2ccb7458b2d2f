// ==========================================
// 空运提单跟踪 - 配置管理器
// ==========================================
// 职责: 端点覆写、超时、重载延迟的读取与持久化
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::store_config::{
    resolve_base_url, StoreConfig, DEFAULT_RELOAD_DELAY_MS, DEFAULT_REQUEST_TIMEOUT_MS,
};
use crate::db::{configure_sqlite_connection, default_db_path, ensure_config_schema, open_sqlite_connection};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 设置库文件路径
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 打开系统数据目录下的默认设置库（目录不存在时创建）
    pub fn open_default() -> ConfigResult<Self> {
        let path = default_db_path().ok_or(ConfigError::DataDirUnavailable)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        tracing::debug!(path = %path.display(), "打开设置库");
        Self::new(&path.to_string_lossy())
    }

    /// 仅存在于内存中的设置库
    pub fn in_memory() -> ConfigResult<Self> {
        let conn = Connection::open_in_memory()?;
        configure_sqlite_connection(&conn)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    pub fn get_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 写入配置值（覆盖已有值）
    pub fn set_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value, updated_at)
             VALUES ('global', ?1, ?2, datetime('now'))
             ON CONFLICT(scope_id, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    /// 删除配置值；不存在时无操作
    pub fn remove_value(&self, key: &str) -> ConfigResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "DELETE FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
        )?;
        Ok(())
    }

    // ===== 端点覆写 =====

    /// 已保存的端点覆写（空白值视为未设置）
    pub fn api_url_override(&self) -> ConfigResult<Option<String>> {
        Ok(self
            .get_value(config_keys::API_URL)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }

    /// 保存端点覆写；空白地址等同于清除
    pub fn set_api_url(&self, url: &str) -> ConfigResult<()> {
        let url = url.trim();
        if url.is_empty() {
            return self.clear_api_url();
        }
        self.set_value(config_keys::API_URL, url)?;
        tracing::info!(api_url = url, "端点覆写已保存");
        Ok(())
    }

    /// 清除端点覆写，恢复构建期或内置默认端点
    pub fn clear_api_url(&self) -> ConfigResult<()> {
        self.remove_value(config_keys::API_URL)?;
        tracing::info!("端点覆写已清除");
        Ok(())
    }

    // ===== 数值配置 =====

    fn get_millis(&self, key: &str, default: u64) -> ConfigResult<Duration> {
        let millis = match self.get_value(key)? {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(config_key = key, raw_value = %raw, "配置值格式错误，使用默认值");
                default
            }),
            None => default,
        };
        Ok(Duration::from_millis(millis))
    }

    pub fn request_timeout(&self) -> ConfigResult<Duration> {
        self.get_millis(config_keys::REQUEST_TIMEOUT_MS, DEFAULT_REQUEST_TIMEOUT_MS)
    }

    pub fn reload_delay(&self) -> ConfigResult<Duration> {
        self.get_millis(config_keys::RELOAD_DELAY_MS, DEFAULT_RELOAD_DELAY_MS)
    }

    /// 组装当前会话使用的端点配置
    ///
    /// 设置库读取失败时记录告警并退回默认值
    pub fn resolve_store_config(&self) -> StoreConfig {
        let override_url = self.api_url_override().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "读取端点覆写失败，使用默认端点");
            None
        });
        let mut config = StoreConfig::new(resolve_base_url(override_url.as_deref()));

        match self.request_timeout() {
            Ok(timeout) => config.request_timeout = timeout,
            Err(e) => tracing::warn!(error = %e, "读取请求超时失败，使用默认值"),
        }
        match self.reload_delay() {
            Ok(delay) => config.reload_delay = delay,
            Err(e) => tracing::warn!(error = %e, "读取重载延迟失败，使用默认值"),
        }
        config
    }

    fn lock(&self) -> ConfigResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 远程端点
    pub const API_URL: &str = "gs_api_url";

    // 时间参数（毫秒）
    pub const REQUEST_TIMEOUT_MS: &str = "request_timeout_ms";
    pub const RELOAD_DELAY_MS: &str = "reload_delay_ms";
}
