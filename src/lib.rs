pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::DashboardConfig;

pub use core::{
    dashboard::Dashboard, fetcher::HttpFetcher, transformer::Transformer, DataSet, UserRecord,
    View,
};
pub use utils::error::{DashboardError, Result};
