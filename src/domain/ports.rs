use crate::domain::model::DataSet;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
}

/// Source of the dashboard's user data.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self) -> Result<DataSet>;
}
