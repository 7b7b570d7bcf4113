use crate::utils::error::Result;
use async_trait::async_trait;

/// Retrieves the raw body behind a fully formed request URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn function(&self) -> &str;
    fn min_source_length(&self) -> usize;
    fn monitoring_enabled(&self) -> bool;
}
