// ==========================================
// 空运提单跟踪 - 报表统计模型
// ==========================================
// 派生数据: 每次按需重新计算，从不持久化
// ==========================================

use crate::domain::types::AwbStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 单个状态的计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: AwbStatus,
    pub count: usize,
}

/// 分组计数（品牌/物料）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// 时间线上的一天
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub label: String, // DD/MM/YYYY
    pub count: usize,
}

/// 报表统计结果
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportStats {
    pub total: usize,
    pub efficiency: u32, // 已交付占比（百分比，四舍五入）
    pub delayed: usize,
    pub status_distribution: Vec<StatusCount>,
    pub brand_distribution: Vec<LabelCount>,
    pub material_distribution: Vec<LabelCount>,
    pub timeline: Vec<TimelinePoint>,
}
