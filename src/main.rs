use clap::Parser;
use dashboard_etl::utils::{logger, validation::Validate};
use dashboard_etl::{CliConfig, Dashboard, HttpFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_level.as_deref(), config.log_format);

    tracing::info!("Starting dashboard-etl");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let dashboard = Dashboard::new(HttpFetcher::new(config));

    match dashboard.run().await {
        Ok(view) => {
            tracing::info!("✅ Dashboard rendered");
            println!("{}", view);
        }
        Err(e) => {
            tracing::error!(
                "❌ Dashboard failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
