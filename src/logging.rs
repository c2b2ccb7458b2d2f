// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认过滤器：本库 info，其余依赖只输出告警
pub const DEFAULT_FILTER: &str = "awb_tracker=info,warn";

/// 详细模式过滤器
pub const VERBOSE_FILTER: &str = "awb_tracker=debug,info";

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（优先于参数）
///   例如: RUST_LOG=debug 或 RUST_LOG=awb_tracker=trace
///
/// # 示例
/// ```no_run
/// use awb_tracker::logging;
/// logging::init(false);
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };

    // 日志写到 stderr，stdout 留给命令输出（列表、CSV）
    let _ = fmt()
        .with_env_filter(env_filter_or(default))
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 以 JSON 行输出日志（便于采集）
pub fn init_json() {
    let _ = fmt()
        .json()
        .with_env_filter(env_filter_or(DEFAULT_FILTER))
        .with_writer(std::io::stderr)
        .try_init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
