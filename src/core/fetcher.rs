use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Plain GET with the client's default timeout and redirect policy.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            // the body is still handed on; the extractor rejects what it can't read
            tracing::warn!("RhymeBrain answered with status {}", status);
        }

        let body = response.text().await?;
        tracing::debug!("Response body: {}", body);
        Ok(body)
    }
}
