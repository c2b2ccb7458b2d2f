// ==========================================
// 空运提单跟踪 - 筛选状态
// ==========================================
// 会话内临时状态，不持久化
// ==========================================

use crate::domain::types::{AwbStatus, DashboardPeriod};
use serde::{Deserialize, Serialize};

/// 列表筛选状态
///
/// - statuses 为空表示不按状态过滤
/// - statuses 保持勾选顺序且不含重复项
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub statuses: Vec<AwbStatus>,
    pub period: DashboardPeriod,
}

impl FilterState {
    /// 勾选/取消勾选某个状态
    pub fn toggle_status(&mut self, status: AwbStatus) {
        if let Some(pos) = self.statuses.iter().position(|s| *s == status) {
            self.statuses.remove(pos);
        } else {
            self.statuses.push(status);
        }
    }

    /// 清空所有筛选条件
    pub fn clear(&mut self) {
        self.statuses.clear();
        self.period = DashboardPeriod::All;
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.period == DashboardPeriod::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_status_adds_then_removes() {
        let mut filter = FilterState::default();
        filter.toggle_status(AwbStatus::Delayed);
        filter.toggle_status(AwbStatus::Delivered);
        assert_eq!(filter.statuses, vec![AwbStatus::Delayed, AwbStatus::Delivered]);

        filter.toggle_status(AwbStatus::Delayed);
        assert_eq!(filter.statuses, vec![AwbStatus::Delivered]);
    }

    #[test]
    fn test_clear() {
        let mut filter = FilterState {
            statuses: vec![AwbStatus::Ok],
            period: DashboardPeriod::Week,
        };
        assert!(!filter.is_empty());
        filter.clear();
        assert!(filter.is_empty());
    }
}
