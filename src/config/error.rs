// ==========================================
// 空运提单跟踪 - 配置层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("设置库错误: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("锁获取失败: {0}")]
    LockError(String),

    #[error("设置目录创建失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("系统数据目录不可用")]
    DataDirUnavailable,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
