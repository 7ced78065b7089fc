pub mod dashboard;
pub mod fetcher;
pub mod transformer;

pub use crate::domain::model::{DataSet, UserRecord, View};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
