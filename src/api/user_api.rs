// ==========================================
// 空运提单跟踪 - 用户管理 API
// ==========================================
// 职责: 账户列表与维护（仅管理员）
// ==========================================

use crate::api::error::ApiResult;
use crate::api::tracking_api::require_admin;
use crate::domain::UserAccount;
use crate::repository::{SaveOutcome, UserRepository, WriteOutcome};
use std::sync::Arc;

pub struct UserApi {
    user_repo: Arc<UserRepository>,
}

impl UserApi {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 账户列表（失败降级为空列表）
    pub async fn list(&self, actor: &UserAccount) -> ApiResult<Vec<UserAccount>> {
        require_admin(actor, "查看账户")?;
        Ok(self.user_repo.list().await)
    }

    /// 新增或更新账户
    pub async fn save(
        &self,
        actor: &UserAccount,
        account: UserAccount,
    ) -> ApiResult<SaveOutcome<UserAccount>> {
        require_admin(actor, "保存账户")?;
        let saved = self.user_repo.save(account).await;
        tracing::info!(actor = %actor.id, id = %saved.record.id, outcome = ?saved.outcome, "保存账户");
        Ok(saved)
    }

    /// 删除账户
    pub async fn delete(&self, actor: &UserAccount, id: &str) -> ApiResult<WriteOutcome> {
        require_admin(actor, "删除账户")?;
        let outcome = self.user_repo.delete(id).await;
        tracing::info!(actor = %actor.id, id, outcome = ?outcome, "删除账户");
        Ok(outcome)
    }
}
