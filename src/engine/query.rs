// ==========================================
// 空运提单跟踪 - 查询/筛选引擎
// ==========================================
// 规则: 文本匹配（任一字段包含，忽略大小写） AND 状态匹配（空集合不过滤）
// 红线: 保持输入顺序，引擎从不重排
// ==========================================

use crate::domain::filter::FilterState;
use crate::domain::report::StatusCount;
use crate::domain::shipment::ShipmentRecord;
use crate::domain::types::AwbStatus;

pub struct QueryEngine;

impl QueryEngine {
    /// 按搜索词与状态集合筛选
    ///
    /// # 参数
    /// - search_term: 空字符串匹配全部
    /// - statuses: 空集合匹配全部
    pub fn filter<'a>(
        &self,
        records: &'a [ShipmentRecord],
        search_term: &str,
        statuses: &[AwbStatus],
    ) -> Vec<&'a ShipmentRecord> {
        let needle = search_term.to_lowercase();
        records
            .iter()
            .filter(|r| Self::matches_search(r, &needle) && Self::matches_status(r, statuses))
            .collect()
    }

    /// 按会话筛选状态筛选
    pub fn filter_with_state<'a>(
        &self,
        records: &'a [ShipmentRecord],
        search_term: &str,
        state: &FilterState,
    ) -> Vec<&'a ShipmentRecord> {
        self.filter(records, search_term, &state.statuses)
    }

    /// 状态看板：每个状态的数量（含 0，声明顺序）
    pub fn status_counts(&self, records: &[ShipmentRecord]) -> Vec<StatusCount> {
        AwbStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: records.iter().filter(|r| r.status == *status).count(),
            })
            .collect()
    }

    fn matches_search(record: &ShipmentRecord, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            &record.supplier,
            &record.waybill_number,
            &record.invoice_refs,
            &record.brand,
            &record.material,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }

    fn matches_status(record: &ShipmentRecord, statuses: &[AwbStatus]) -> bool {
        statuses.is_empty() || statuses.contains(&record.status)
    }
}
