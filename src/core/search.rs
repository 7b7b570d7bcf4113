use crate::core::extractor::extract_candidates_or_empty;
use crate::core::picker::pick;
use crate::core::query::build_request_url;
use crate::domain::model::{CandidateList, SearchOutcome, SearchQuery};
use crate::domain::ports::{ConfigProvider, Fetcher};
use crate::utils::error::PortmanteauError;
use crate::utils::monitor::SystemMonitor;

/// Runs query building, fetching, extraction and picking for one word.
pub struct PortmanteauSearch<F: Fetcher, C: ConfigProvider> {
    fetcher: F,
    config: C,
    monitor: SystemMonitor,
}

impl<F: Fetcher, C: ConfigProvider> PortmanteauSearch<F, C> {
    pub fn new(fetcher: F, config: C) -> Self {
        let monitor = SystemMonitor::new(config.monitoring_enabled());
        Self {
            fetcher,
            config,
            monitor,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn request_url(&self, query: &SearchQuery) -> String {
        build_request_url(self.config.endpoint(), self.config.function(), query)
    }

    /// Fetches and filters candidates for `query`. Transport and parse
    /// failures both come back as an empty list.
    pub async fn candidates(&self, query: &SearchQuery) -> CandidateList {
        let url = self.request_url(query);
        self.candidates_at(&url).await
    }

    async fn candidates_at(&self, url: &str) -> CandidateList {
        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Request to RhymeBrain failed: {}", e);
                return Vec::new();
            }
        };
        self.monitor.log_stats("fetch");

        let candidates = extract_candidates_or_empty(&body, self.config.min_source_length());
        self.monitor.log_stats("extract");
        candidates
    }

    pub async fn run(&self, query: &SearchQuery) -> SearchOutcome {
        tracing::info!("Searching portmanteaus for '{}'", query.as_str());
        let request_url = self.request_url(query);
        let candidates = self.candidates_at(&request_url).await;

        let portmanteau = match pick(&candidates) {
            Ok(picked) => Some(picked.to_string()),
            Err(PortmanteauError::EmptyCandidatesError) => {
                tracing::info!("No portmanteau candidates for '{}'", query.as_str());
                None
            }
            Err(e) => {
                tracing::warn!("Picking failed: {}", e);
                None
            }
        };
        self.monitor.log_stats("pick");

        SearchOutcome {
            word: query.as_str().to_string(),
            request_url,
            candidate_count: candidates.len(),
            portmanteau,
            searched_at: chrono::Utc::now(),
        }
    }
}
