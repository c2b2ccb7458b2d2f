// ==========================================
// 空运提单跟踪 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 端点错误 =====
    #[error("远程端点未配置")]
    NotConfigured,

    #[error("远程请求失败: {0}")]
    Transport(String),

    #[error("远程返回错误状态: {status}")]
    HttpStatus { status: u16 },

    // ===== 数据错误 =====
    #[error("响应解析失败: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Parse(err.to_string())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Parse(err.to_string())
    }
}

/// 仓储层 Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
