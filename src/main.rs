// ==========================================
// 空运提单跟踪 - 命令行入口
// ==========================================
// 子命令: list / status-board / report / export / login / endpoint
// 日志写 stderr，命令结果写 stdout
// ==========================================

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use awb_tracker::api::{AuthApi, TrackingApi};
use awb_tracker::config::{ConfigManager, StoreConfig};
use awb_tracker::domain::{AwbStatus, FilterState, ReportStats, ReportWindow, ShipmentRecord};
use awb_tracker::engine::format_display_date;
use awb_tracker::mapping::{classify_status, StatusMatch};
use awb_tracker::repository::{HttpSheetStore, SheetStore, UserRepository};
use awb_tracker::{i18n, logging};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "awb-tracker",
    version,
    about = "Air waybill tracking over a remote spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Debug-level logging for this crate.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long = "json-logs", global = true)]
    json_logs: bool,

    /// Operator-facing language (pt-BR or en).
    #[arg(long, global = true, default_value = i18n::DEFAULT_LOCALE)]
    locale: String,

    /// Settings database (defaults to the platform data directory).
    #[arg(long = "settings-db", value_name = "PATH", global = true)]
    settings_db: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List shipments, optionally filtered.
    List {
        /// Case-insensitive text matched against supplier, AWB, invoices, brand and material.
        #[arg(long, default_value = "")]
        search: String,

        /// Status filter; repeat to select several.
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<String>,
    },

    /// Count shipments per status.
    StatusBoard,

    /// Summary statistics over the last N days (7, 30, 90 or 365).
    Report {
        #[arg(long, default_value_t = 30)]
        days: u32,
    },

    /// Write the semicolon-separated export file for the filtered view.
    Export {
        /// Output directory.
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,

        /// Same text filter as `list`.
        #[arg(long, default_value = "")]
        search: String,

        /// Same status filter as `list`; repeat to select several.
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<String>,
    },

    /// Check credentials against the user sheet.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Show or change the remote endpoint override.
    Endpoint {
        #[command(subcommand)]
        action: EndpointAction,
    },
}

#[derive(Subcommand)]
enum EndpointAction {
    /// Print the endpoint in use and where it comes from.
    Show,
    /// Save an override URL.
    Set { url: String },
    /// Remove the override.
    Clear,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.json_logs {
        logging::init_json();
    } else {
        logging::init(cli.verbose);
    }
    i18n::set_locale(&cli.locale);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "命令执行失败");
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn open_settings(path: Option<&PathBuf>) -> anyhow::Result<ConfigManager> {
    let manager = match path {
        Some(p) => ConfigManager::new(&p.to_string_lossy()),
        None => ConfigManager::open_default(),
    };
    manager.context("无法打开设置库")
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = open_settings(cli.settings_db.as_ref())?;

    let config = settings.resolve_store_config();
    tracing::debug!(base_url = %config.base_url, "使用远程端点");
    let store: Arc<dyn SheetStore> =
        Arc::new(HttpSheetStore::new(config.clone()).context("无法创建 HTTP 客户端")?);

    match cli.command {
        Command::List { search, statuses } => {
            let api = TrackingApi::new(store, config);
            let filter = parse_status_filter(&statuses)?;
            let records = api.load().await;
            let visible = api.view(&records, &search, &filter);
            if visible.is_empty() {
                println!("{}", i18n::t("report.no_records"));
            }
            for record in visible {
                println!("{}", list_line(record));
            }
        }
        Command::StatusBoard => {
            let api = TrackingApi::new(store, config);
            let records = api.load().await;
            for entry in api.status_board(&records) {
                println!("{:<22} {}", entry.status.localized_label(), entry.count);
            }
        }
        Command::Report { days } => {
            let window = ReportWindow::from_days(days)
                .with_context(|| format!("不支持的报表窗口: {} 天（可选 7 / 30 / 90 / 365）", days))?;
            let api = TrackingApi::new(store, config);
            let records = api.load().await;
            print_report(&api.report(&records, window));
        }
        Command::Export { out, search, statuses } => {
            let api = TrackingApi::new(store, config);
            let filter = parse_status_filter(&statuses)?;
            let records = api.load().await;
            let (text, file_name) = api.export_view(&records, &search, &filter);
            let path = out.join(file_name);
            std::fs::write(&path, text)
                .with_context(|| format!("写入导出文件失败: {}", path.display()))?;
            let shown = path.display().to_string();
            println!("{}", i18n::t_with_args("export.written", &[("path", &shown)]));
        }
        Command::Login { email, password } => {
            let auth = AuthApi::new(Arc::new(UserRepository::users(store)));
            match auth.login(&email, &password).await {
                Ok(user) => println!("{} <{}> [{}]", user.name, user.email, user.role),
                Err(e) => {
                    eprintln!("{}", e.operator_message());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Endpoint { action } => return endpoint(&settings, &action),
    }

    Ok(ExitCode::SUCCESS)
}

fn endpoint(settings: &ConfigManager, action: &EndpointAction) -> anyhow::Result<ExitCode> {
    match action {
        EndpointAction::Show => {
            let override_url = settings.api_url_override()?;
            let config: StoreConfig = settings.resolve_store_config();
            let source = if override_url.is_some() { "override" } else { "default" };
            println!("{} ({})", config.base_url, source);
        }
        EndpointAction::Set { url } => settings.set_api_url(url)?,
        EndpointAction::Clear => settings.clear_api_url()?,
    }
    Ok(ExitCode::SUCCESS)
}

/// 命令行状态参数只接受已知文本
fn parse_status_filter(raw: &[String]) -> anyhow::Result<FilterState> {
    let mut filter = FilterState::default();
    for text in raw {
        let status: AwbStatus = match classify_status(text) {
            StatusMatch::Defaulted => anyhow::bail!("未知状态: {}", text),
            matched => matched.status(),
        };
        if !filter.statuses.contains(&status) {
            filter.toggle_status(status);
        }
    }
    Ok(filter)
}

fn list_line(record: &ShipmentRecord) -> String {
    format!(
        "{:<14} {:<24} {:<18} {:>10} {:>10}  {}",
        record.waybill_number,
        record.supplier,
        record.status.localized_label(),
        format_display_date(&record.dispatch_date),
        format_display_date(&record.arrival_date),
        record.invoice_refs
    )
}

fn print_report(stats: &ReportStats) {
    println!("{}: {}", i18n::t("report.total"), stats.total);
    println!("{}: {}%", i18n::t("report.efficiency"), stats.efficiency);
    println!("{}: {}", i18n::t("report.delayed"), stats.delayed);

    println!();
    for entry in &stats.status_distribution {
        println!("  {:<22} {}", entry.status.localized_label(), entry.count);
    }

    println!();
    for entry in &stats.brand_distribution {
        println!("  {:<22} {}", entry.label, entry.count);
    }

    println!();
    for entry in &stats.material_distribution {
        println!("  {:<22} {}", entry.label, entry.count);
    }

    println!();
    for point in &stats.timeline {
        println!("  {:<8} {}", point.label, point.count);
    }
}
