use clap::Parser;
use parity_demo::config::toml_config::TomlConfig;
use parity_demo::core::ConfigProvider;
use parity_demo::utils::{logger, validation::Validate};
use parity_demo::{ConsoleSink, DemoEngine, DemoPipeline, MemorySink};

#[derive(Parser)]
#[command(name = "toml-demo")]
#[command(about = "Demo runner with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "demo-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override banner setting from config
    #[arg(long)]
    banner: Option<bool>,

    /// Emit JSON logs instead of the compact format
    #[arg(long)]
    log_json: bool,

    /// Dry run - show what would be emitted without writing to stdout
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based demo runner");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(banner) = args.banner {
        config.greeter.get_or_insert_with(Default::default).banner = Some(banner);
        tracing::info!("🔧 Banner overridden to: {}", banner);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - Nothing will be written to stdout");
        perform_dry_run(&config).await?;
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建輸出與管道
    let sink = ConsoleSink::new();
    let pipeline = DemoPipeline::new(sink, config);

    // 創建引擎並運行
    let engine = DemoEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(emitted) => {
            tracing::info!("✅ Demo run completed successfully!");
            tracing::info!("🖨️ Emitted {} lines", emitted);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Demo run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                parity_demo::utils::error::ErrorSeverity::Low => 0,
                parity_demo::utils::error::ErrorSeverity::Medium => 2,
                parity_demo::utils::error::ErrorSeverity::High => 1,
                parity_demo::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!(
        "  Demo: {} v{}",
        config.demo.name,
        config.demo.version
    );
    tracing::info!("  Sequence: {:?}", config.sequence());
    tracing::info!("  Greeter: {}", config.greeter_name());
    tracing::info!("  Banner: {}", config.banner_enabled());
    tracing::info!("  Monitoring: {}", config.monitoring_enabled());

    if args.dry_run {
        tracing::info!("  🔍 DRY RUN MODE ENABLED");
    }
}

async fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    // 在記憶體緩衝裡完整跑一遍管道，逐行顯示將會發送的內容
    let sink = MemorySink::new();
    let pipeline = DemoPipeline::new(sink.clone(), config.clone());
    let engine = DemoEngine::new(pipeline);

    let emitted = engine.run().await?;

    tracing::info!("🔍 Dry Run Result ({} lines):", emitted);
    for line in sink.lines().await {
        tracing::info!("  | {}", line);
    }

    tracing::info!("✅ Dry run complete. Re-run without --dry-run to write to stdout.");

    Ok(())
}
