#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use toml_config::{TomlConfig, LOG_LEVELS};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Settings after CLI flags and the optional TOML file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub base_url: String,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: None,
            log_format: LogFormat::Compact,
            verbose: false,
        }
    }
}

impl DashboardConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// 以檔案內容覆蓋預設值
    pub fn merge_file(mut self, file: &TomlConfig) -> Result<Self> {
        file.validate()?;

        if let Some(base_url) = file.base_url() {
            self.base_url = base_url.to_string();
        }
        if let Some(level) = file.log_level() {
            self.log_level = Some(level.to_ascii_lowercase());
        }
        if let Some(format) = file.log_format().and_then(LogFormat::parse) {
            self.log_format = format;
        }
        Ok(self)
    }
}

impl ConfigProvider for DashboardConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        let config = DashboardConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_file_overrides_defaults() {
        let file = TomlConfig::from_toml_str(
            "[server]\nbase_url = \"https://example.com\"\n[logging]\nlevel = \"WARN\"\nformat = \"json\"\n",
        )
        .unwrap();

        let config = DashboardConfig::default().merge_file(&file).unwrap();
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_merge_file_rejects_invalid_file() {
        let file = TomlConfig::from_toml_str("[server]\nbase_url = \"nope\"\n").unwrap();
        assert!(DashboardConfig::default().merge_file(&file).is_err());
    }
}
