// ==========================================
// 空运提单跟踪 - 运单 API
// ==========================================
// 职责: 加载、筛选、状态看板、统计报表、导出、管理员写操作
// 写后策略: 等待 reload_delay 后重新加载整表
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::StoreConfig;
use crate::domain::{FilterState, ReportStats, ReportWindow, ShipmentRecord, StatusCount, UserAccount};
use crate::engine::{export_file_name, to_export_text, AnalyticsEngine, QueryEngine};
use crate::repository::{SaveOutcome, SheetStore, ShipmentRepository, WriteOutcome};
use chrono::Utc;
use std::sync::Arc;

// ==========================================
// TrackingApi - 运单 API
// ==========================================
pub struct TrackingApi {
    repo: ShipmentRepository,
    config: StoreConfig,
    query: QueryEngine,
    analytics: AnalyticsEngine,
}

impl TrackingApi {
    pub fn new(store: Arc<dyn SheetStore>, config: StoreConfig) -> Self {
        Self {
            repo: ShipmentRepository::shipments(store),
            config,
            query: QueryEngine,
            analytics: AnalyticsEngine::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.repo.is_configured()
    }

    // ===== 读 =====

    /// 加载全部运单（失败降级为空列表）
    pub async fn load(&self) -> Vec<ShipmentRecord> {
        self.repo.list().await
    }

    /// 按搜索词与筛选状态过滤，保持原顺序
    pub fn view<'a>(
        &self,
        records: &'a [ShipmentRecord],
        search_term: &str,
        filter: &FilterState,
    ) -> Vec<&'a ShipmentRecord> {
        self.query.filter_with_state(records, search_term, filter)
    }

    /// 状态看板
    pub fn status_board(&self, records: &[ShipmentRecord]) -> Vec<StatusCount> {
        self.query.status_counts(records)
    }

    /// 按报表窗口计算统计
    pub fn report(&self, records: &[ShipmentRecord], window: ReportWindow) -> ReportStats {
        self.analytics.compute_stats_for_window(records, window)
    }

    /// 导出文本与建议文件名
    pub fn export(&self, records: &[ShipmentRecord]) -> (String, String) {
        (to_export_text(records), export_file_name(Utc::now()))
    }

    /// 导出当前视图：只包含通过搜索与状态筛选的运单
    pub fn export_view(
        &self,
        records: &[ShipmentRecord],
        search_term: &str,
        filter: &FilterState,
    ) -> (String, String) {
        let visible: Vec<ShipmentRecord> = self
            .view(records, search_term, filter)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(total = records.len(), exported = visible.len(), "导出当前视图");
        self.export(&visible)
    }

    // ===== 写（仅管理员） =====

    /// 保存运单；没有标识时生成新标识
    pub async fn save(
        &self,
        actor: &UserAccount,
        record: ShipmentRecord,
    ) -> ApiResult<SaveOutcome<ShipmentRecord>> {
        require_admin(actor, "保存运单")?;
        let saved = self.repo.save(record).await;
        tracing::info!(actor = %actor.id, id = %saved.record.id, outcome = ?saved.outcome, "保存运单");
        Ok(saved)
    }

    /// 删除运单
    pub async fn delete(&self, actor: &UserAccount, id: &str) -> ApiResult<WriteOutcome> {
        require_admin(actor, "删除运单")?;
        let outcome = self.repo.delete(id).await;
        tracing::info!(actor = %actor.id, id, outcome = ?outcome, "删除运单");
        Ok(outcome)
    }

    /// 写后重载：远程表格可能延迟可见，等待后再读
    pub async fn reload_after_write(&self) -> Vec<ShipmentRecord> {
        tokio::time::sleep(self.config.reload_delay).await;
        self.load().await
    }
}

/// 管理员校验
pub(crate) fn require_admin(actor: &UserAccount, action: &str) -> ApiResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        tracing::warn!(actor = %actor.id, action, "非管理员尝试写操作");
        Err(ApiError::PermissionDenied(action.to_string()))
    }
}
