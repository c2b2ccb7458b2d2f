// ==========================================
// 空运提单跟踪 - 领域类型定义
// ==========================================
// 闭合枚举: 运单状态 / 用户角色 / 账户状态 / 统计周期
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 运单状态 (AWB Status)
// ==========================================
// 红线: 映射后必须是以下八个值之一，绝不保留任意字符串
// 声明顺序即展示顺序（状态分布、状态看板都依赖它）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AwbStatus {
    #[default]
    InTransit,          // 在途
    Available,          // 可提货
    PartiallyCollected, // 部分提货
    Delivered,          // 已交付
    Delayed,            // 延误
    AwaitingWaybill,    // 等待运单
    WrongCollection,    // 错误提货
    Ok,                 // 正常
}

impl AwbStatus {
    /// 全部状态（声明顺序）
    pub const ALL: [AwbStatus; 8] = [
        AwbStatus::InTransit,
        AwbStatus::Available,
        AwbStatus::PartiallyCollected,
        AwbStatus::Delivered,
        AwbStatus::Delayed,
        AwbStatus::AwaitingWaybill,
        AwbStatus::WrongCollection,
        AwbStatus::Ok,
    ];

    /// 规范展示文本
    pub fn display_label(&self) -> &'static str {
        match self {
            AwbStatus::InTransit => "In Transit",
            AwbStatus::Available => "Available",
            AwbStatus::PartiallyCollected => "Partially Collected",
            AwbStatus::Delivered => "Delivered",
            AwbStatus::Delayed => "Delayed",
            AwbStatus::AwaitingWaybill => "Awaiting Waybill",
            AwbStatus::WrongCollection => "Wrong Collection",
            AwbStatus::Ok => "OK",
        }
    }

    /// 远程表格中存储的文本（写回时必须使用）
    pub fn sheet_label(&self) -> &'static str {
        match self {
            AwbStatus::InTransit => "Em Trânsito",
            AwbStatus::Available => "Disponível",
            AwbStatus::PartiallyCollected => "Coletado Parcial",
            AwbStatus::Delivered => "Entregue",
            AwbStatus::Delayed => "Atrasado",
            AwbStatus::AwaitingWaybill => "Aguardando AWB",
            AwbStatus::WrongCollection => "Coleta Errada",
            AwbStatus::Ok => "OK",
        }
    }

    /// 国际化键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AwbStatus::InTransit => "status.in_transit",
            AwbStatus::Available => "status.available",
            AwbStatus::PartiallyCollected => "status.partially_collected",
            AwbStatus::Delivered => "status.delivered",
            AwbStatus::Delayed => "status.delayed",
            AwbStatus::AwaitingWaybill => "status.awaiting_waybill",
            AwbStatus::WrongCollection => "status.wrong_collection",
            AwbStatus::Ok => "status.ok",
        }
    }

    /// 当前语言下的标签
    pub fn localized_label(&self) -> String {
        crate::i18n::t(self.i18n_key())
    }
}

impl fmt::Display for AwbStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

// ==========================================
// 用户角色 (User Role)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    /// 从表格文本解析：包含 "admin" 即为管理员
    pub fn from_sheet(s: &str) -> Self {
        if s.to_lowercase().contains("admin") {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }

    /// 转换为表格存储的字符串
    pub fn to_sheet_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sheet_str())
    }
}

// ==========================================
// 账户状态 (Account State)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountState {
    #[default]
    Active,
    Inactive,
}

impl AccountState {
    /// 从表格文本解析，未知值视为启用
    pub fn from_sheet(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "inativo" | "inactive" => AccountState::Inactive,
            _ => AccountState::Active,
        }
    }

    /// 转换为表格存储的字符串
    pub fn to_sheet_str(&self) -> &'static str {
        match self {
            AccountState::Active => "ativo",
            AccountState::Inactive => "inativo",
        }
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sheet_str())
    }
}

// ==========================================
// 看板周期 (Dashboard Period)
// ==========================================
// 看板筛选中保存的周期选择，只随筛选状态保存与清除
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashboardPeriod {
    #[serde(rename = "hoje")]
    Today,
    #[serde(rename = "semana")]
    Week,
    #[serde(rename = "mes")]
    Month,
    #[default]
    #[serde(rename = "todos")]
    All,
}

// ==========================================
// 报表窗口 (Report Window)
// ==========================================
// 报表页可选的回看天数：7 / 30 / 90 / 365，默认 30
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportWindow {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    LastYear,
}

impl ReportWindow {
    /// 全部窗口（界面顺序）
    pub const ALL: [ReportWindow; 4] = [
        ReportWindow::Last7Days,
        ReportWindow::Last30Days,
        ReportWindow::Last90Days,
        ReportWindow::LastYear,
    ];

    /// 回看天数
    pub fn days(&self) -> u32 {
        match self {
            ReportWindow::Last7Days => 7,
            ReportWindow::Last30Days => 30,
            ReportWindow::Last90Days => 90,
            ReportWindow::LastYear => 365,
        }
    }

    /// 从天数解析，只接受 7 / 30 / 90 / 365
    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }
}
