use clap::Parser;
use phone_etl::config::LogFormat;
use phone_etl::utils::error::ErrorSeverity;
use phone_etl::utils::{logger, validation::Validate};
use phone_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, PhonePipeline};

fn fail(e: &EtlError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting phone-etl");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    tracing::info!("📁 Scanning directory: {}", config.scan_directory);
    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.scan_directory.clone());
    let monitor_enabled = config.monitor;
    let error_policy = config.error_policy;
    let pipeline = PhonePipeline::new(storage, config);
    let engine =
        EtlEngine::new_with_monitoring(pipeline, monitor_enabled).with_error_policy(error_policy);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be read or written");
        let plan = match engine.plan().await {
            Ok(plan) => plan,
            Err(e) => fail(&e),
        };
        println!("📋 {} file(s) would be processed:", plan.len());
        for (input, output) in plan {
            println!("  {} -> {}", input, output);
        }
        return Ok(());
    }

    let summary = match engine.run().await {
        Ok(summary) => summary,
        Err(e) => fail(&e),
    };

    for report in &summary.processed {
        println!(
            "✅ {} -> {} ({} unique number(s), {} dropped)",
            report.input, report.output, report.unique_numbers, report.dropped_runs
        );
    }
    for failed in &summary.failed {
        eprintln!("⏭️ {} skipped: {}", failed.input, failed.error);
    }

    Ok(())
}
