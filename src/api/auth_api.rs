// ==========================================
// 空运提单跟踪 - 登录 API
// ==========================================
// 规则:
// - 邮箱去空白、忽略大小写；密码去空白后精确比较
// - 停用账户即使凭据正确也拒绝
// - 凭据只在内存中比较，不写日志
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{normalize_email, UserAccount};
use crate::repository::UserRepository;
use std::sync::Arc;

/// 在已加载的账户中校验凭据
///
/// # 返回
/// - Ok(&UserAccount): 匹配且启用的账户
/// - Err(InvalidCredentials): 无匹配（空密码永不匹配）
/// - Err(AccountInactive): 匹配但已停用
pub fn authenticate<'a>(
    users: &'a [UserAccount],
    email: &str,
    password: &str,
) -> ApiResult<&'a UserAccount> {
    let email = normalize_email(email);
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::InvalidCredentials);
    }

    let user = users
        .iter()
        .find(|u| u.login_key() == email && u.password.trim() == password)
        .ok_or(ApiError::InvalidCredentials)?;

    if !user.is_active() {
        return Err(ApiError::AccountInactive);
    }
    Ok(user)
}

// ==========================================
// AuthApi - 登录 API
// ==========================================
pub struct AuthApi {
    user_repo: Arc<UserRepository>,
}

impl AuthApi {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 拉取账户表并校验凭据
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<UserAccount> {
        if !self.user_repo.is_configured() {
            return Err(ApiError::EndpointNotConfigured);
        }

        let users = self.user_repo.list().await;
        match authenticate(&users, email, password) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "登录成功");
                Ok(user.clone())
            }
            Err(e) => {
                tracing::warn!(reason = %e, "登录被拒绝");
                Err(e)
            }
        }
    }
}
