// src/ingest/source.rs

//! Remote job source.
//!
//! The paginated HTTP endpoint is hidden behind a trait so ingestion can
//! be exercised against an in-memory source in tests.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::SourceConfig;
use crate::error::{AppError, Result};
use crate::models::JobPage;

/// A paginated source of raw job records.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch one page (1-based) of the dataset.
    async fn fetch_page(&self, page: u32) -> Result<JobPage>;
}

/// HTTP implementation backed by the configured JSON endpoint.
pub struct HttpJobSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJobSource {
    /// Create a configured source from the application config.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_page(&self, page: u32) -> Result<JobPage> {
        let url = format!("{}?page={}", self.base_url, page);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::network(None, format!("request for page {page} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::network(
                Some(status.as_u16()),
                format!("page {page} returned {status}"),
            ));
        }

        response.json::<JobPage>().await.map_err(|e| {
            AppError::network(
                Some(status.as_u16()),
                format!("page {page} body was not valid JSON: {e}"),
            )
        })
    }
}
