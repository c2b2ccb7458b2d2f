// ==========================================
// 空运提单跟踪 - 统计分析引擎
// ==========================================
// 输入: 规范运单记录 + 时间窗口（天）
// 输出: ReportStats（纯函数，每次重新计算）
// ==========================================
// 规则:
// - 发运日期为空或无法解析的记录不计入窗口（不报错）
// - 效率 = round(已交付 / 总数 * 100)，总数为 0 时为 0
// - 品牌取前 6、物料取前 5，同数量按首次出现顺序
// - 时间线按日历顺序排列，而非展示字符串的字典序
// ==========================================

use crate::domain::report::{LabelCount, ReportStats, StatusCount, TimelinePoint};
use crate::domain::shipment::ShipmentRecord;
use crate::domain::types::{AwbStatus, ReportWindow};
use crate::engine::dates::{display_date, parse_calendar_date};
use chrono::{Days, Local, NaiveDate};
use std::collections::{BTreeMap, HashMap};

/// 品牌分布默认取前 N
pub const BRAND_TOP_N: usize = 6;

/// 物料分布默认取前 N
pub const MATERIAL_TOP_N: usize = 5;

/// 品牌缺失时的标签
pub const UNSPECIFIED_BRAND: &str = "NÃO INFORMADO";

/// 物料缺失时的标签
pub const UNSPECIFIED_MATERIAL: &str = "OUTROS";

pub struct AnalyticsEngine {
    brand_top_n: usize,
    material_top_n: usize,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self {
            brand_top_n: BRAND_TOP_N,
            material_top_n: MATERIAL_TOP_N,
        }
    }

    /// 以今天（本地时区）为基准计算统计
    pub fn compute_stats(&self, records: &[ShipmentRecord], window_days: u32) -> ReportStats {
        self.compute_stats_at(records, window_days, Local::now().date_naive())
    }

    /// 按报表窗口计算
    pub fn compute_stats_for_window(
        &self,
        records: &[ShipmentRecord],
        window: ReportWindow,
    ) -> ReportStats {
        self.compute_stats(records, window.days())
    }

    /// 以指定日期为基准计算统计
    pub fn compute_stats_at(
        &self,
        records: &[ShipmentRecord],
        window_days: u32,
        today: NaiveDate,
    ) -> ReportStats {
        let windowed = self.window(records, window_days, today);

        let total = windowed.len();
        let delivered = windowed
            .iter()
            .filter(|(r, _)| r.status == AwbStatus::Delivered)
            .count();
        let delayed = windowed
            .iter()
            .filter(|(r, _)| r.status == AwbStatus::Delayed)
            .count();

        let status_distribution = AwbStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: windowed.iter().filter(|(r, _)| r.status == *status).count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        let brand_distribution = top_n(
            windowed.iter().map(|(r, _)| r.brand.as_str()),
            UNSPECIFIED_BRAND,
            self.brand_top_n,
        );
        let material_distribution = top_n(
            windowed.iter().map(|(r, _)| r.material.as_str()),
            UNSPECIFIED_MATERIAL,
            self.material_top_n,
        );

        tracing::debug!(total, delivered, delayed, window_days, "报表统计完成");

        ReportStats {
            total,
            efficiency: efficiency(delivered, total),
            delayed,
            status_distribution,
            brand_distribution,
            material_distribution,
            timeline: timeline(windowed.iter().map(|(_, d)| *d)),
        }
    }

    /// 时间窗口：发运日期 >= 今天 - window_days
    fn window<'a>(
        &self,
        records: &'a [ShipmentRecord],
        window_days: u32,
        today: NaiveDate,
    ) -> Vec<(&'a ShipmentRecord, NaiveDate)> {
        let cutoff = today
            .checked_sub_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MIN);

        records
            .iter()
            .filter_map(|r| parse_calendar_date(&r.dispatch_date).map(|d| (r, d)))
            .filter(|(_, d)| *d >= cutoff)
            .collect()
    }
}

/// 已交付占比（百分比，四舍五入）
pub fn efficiency(delivered: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((delivered as f64 / total as f64) * 100.0).round() as u32
}

/// 分组计数后按数量降序取前 N（稳定排序，同数量保持首次出现顺序）
fn top_n<'a>(values: impl Iterator<Item = &'a str>, unspecified: &str, n: usize) -> Vec<LabelCount> {
    let mut groups: Vec<LabelCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for value in values {
        let trimmed = value.trim();
        let label = if trimmed.is_empty() {
            unspecified.to_string()
        } else {
            trimmed.to_uppercase()
        };

        match index.get(&label) {
            Some(&i) => groups[i].count += 1,
            None => {
                index.insert(label.clone(), groups.len());
                groups.push(LabelCount { label, count: 1 });
            }
        }
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(n);
    groups
}

/// 按天分组计数，日历顺序
fn timeline(dates: impl Iterator<Item = NaiveDate>) -> Vec<TimelinePoint> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in dates {
        *counts.entry(date).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(date, count)| TimelinePoint {
            date,
            label: display_date(date),
            count,
        })
        .collect()
}
