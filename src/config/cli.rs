use crate::config::toml_config::TomlConfig;
use crate::config::DashboardConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dashboard-etl")]
#[command(about = "Fetch dashboard user data, transform it and render the dashboard view")]
pub struct CliConfig {
    #[arg(long, help = "Server origin that serves /api/data [default: http://localhost:3000]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable debug logging (overrides [logging] level)")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 預設值 < TOML 檔案 < 命令列參數
    pub fn resolve(&self) -> Result<DashboardConfig> {
        let mut config = DashboardConfig::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            config = config.merge_file(&file)?;
        }

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if self.json_logs {
            config.log_format = LogFormat::Json;
        }
        if self.verbose {
            config.verbose = true;
            config.log_level = Some("debug".to_string());
        }

        Ok(config)
    }
}
