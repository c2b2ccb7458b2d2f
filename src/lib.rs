// ==========================================
// 空运提单跟踪 - 核心库
// ==========================================
// 系统定位: 远程表格（AWB / CADASTRO USUÁRIO）之上的记录对账与分析层
// 技术栈: Rust + reqwest + SQLite（仅本地设置）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 映射层 - 外部行 ↔ 规范记录
pub mod mapping;

// 数据仓储层 - 远程表格读写
pub mod repository;

// 引擎层 - 筛选、统计、导出
pub mod engine;

// 配置层 - 端点与本地设置
pub mod config;

// 数据库基础设施（设置库）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AccountState, AwbStatus, DashboardPeriod, FilterState, ReportStats, ReportWindow, ShipmentRecord,
    StatusCount, UserAccount, UserRole,
};

// 映射
pub use mapping::{EntityMapper, MappingDiagnostics, ShipmentMapper, UserMapper};

// 引擎
pub use engine::{AnalyticsEngine, QueryEngine};

// 仓储
pub use repository::{HttpSheetStore, SheetStore, WriteOutcome};

// 配置
pub use config::{ConfigManager, StoreConfig};

// API
pub use api::{ApiError, AuthApi, TrackingApi, UserApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "AWB Tracker";
