use crate::core::transformer::Transformer;
use crate::core::{Fetcher, View};
use crate::utils::error::Result;

/// Markup the dashboard renders. It does not depend on the loaded data.
pub const PLACEHOLDER: View = View::new("<div>Dashboard</div>");

pub struct Dashboard<F: Fetcher> {
    fetcher: F,
    transformer: Transformer,
}

impl<F: Fetcher> Dashboard<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            transformer: Transformer::identity(),
        }
    }

    /// Fetch, then transform. The processed records are dropped afterwards.
    pub async fn load(&self) -> Result<usize> {
        tracing::info!("Fetching dashboard data...");
        let raw_data = self.fetcher.fetch().await?;
        tracing::info!("Fetched {} records", raw_data.len());

        let processed = self.transformer.apply(raw_data);
        let count = processed.len();
        tracing::debug!("Transformed {} records", count);

        Ok(count)
    }

    pub fn render(&self) -> View {
        PLACEHOLDER
    }

    pub async fn run(&self) -> Result<View> {
        self.load().await?;
        Ok(self.render())
    }
}
