// ==========================================
// 空运提单跟踪 - 用户领域模型
// ==========================================
// 红线: 角色只能是 admin / user 之一
// 红线: 停用账户无论凭据是否正确都必须拒绝登录
// ==========================================

use crate::domain::types::{AccountState, UserRole};
use serde::{Deserialize, Serialize};

// ==========================================
// UserAccount - 用户账户
// ==========================================
// 注意: 密码按表格中的明文存储与比较（远程表格的既有约定）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String, // 登录键，比较时忽略大小写与首尾空白
    pub password: String,
    pub role: UserRole,
    pub state: AccountState,
}

impl UserAccount {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_active(&self) -> bool {
        self.state == AccountState::Active
    }

    /// 登录键（小写 + 去空白）
    pub fn login_key(&self) -> String {
        normalize_email(&self.email)
    }
}

/// 邮箱规范化：去首尾空白并小写
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_key_is_case_and_whitespace_insensitive() {
        let user = UserAccount {
            email: "  Ana.Souza@Empresa.COM ".to_string(),
            ..Default::default()
        };
        assert_eq!(user.login_key(), "ana.souza@empresa.com");
    }

    #[test]
    fn test_default_user_is_active_non_admin() {
        let user = UserAccount::default();
        assert!(user.is_active());
        assert!(!user.is_admin());
    }
}
