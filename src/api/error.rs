// ==========================================
// 空运提单跟踪 - API层错误类型
// ==========================================
// 职责: 登录与权限错误；远程读写失败不在此列（已降级为空列表或 WriteOutcome）
// ==========================================

use crate::i18n::t;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // ===== 登录 =====
    #[error("邮箱或密码错误")]
    InvalidCredentials,

    #[error("账户已停用")]
    AccountInactive,

    #[error("远程端点未配置")]
    EndpointNotConfigured,

    // ===== 权限 =====
    #[error("权限不足: {0}")]
    PermissionDenied(String),
}

impl ApiError {
    /// 面向操作员的提示（随当前语言）
    pub fn operator_message(&self) -> String {
        match self {
            ApiError::InvalidCredentials => t("auth.invalid_credentials"),
            ApiError::AccountInactive => t("auth.account_inactive"),
            ApiError::EndpointNotConfigured => t("auth.endpoint_not_configured"),
            ApiError::PermissionDenied(_) => t("auth.permission_denied"),
        }
    }
}

/// API层 Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
