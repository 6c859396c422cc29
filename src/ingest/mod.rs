// src/ingest/mod.rs

//! Dataset ingestion.
//!
//! Fetches every page of the remote dataset strictly one at a time,
//! normalizes the raw records, and merges them into one in-memory
//! collection guarded by a TTL cache.

pub mod cache;
pub mod normalize;
pub mod source;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::Result;
use crate::models::Job;

pub use cache::JobCache;
pub use normalize::normalize;
pub use source::{HttpJobSource, JobSource};

/// Hard ceiling on pages fetched per ingestion.
///
/// Intentional tradeoff against a misbehaving source reporting endless
/// pages, not an expected limit for well-formed data.
pub const MAX_PAGES: u32 = 10;

/// Orchestrates sequential page fetching and normalization.
pub struct Ingestor<S> {
    source: S,
    max_pages: u32,
}

impl<S: JobSource> Ingestor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_pages: MAX_PAGES,
        }
    }

    pub fn with_max_pages(source: S, max_pages: u32) -> Self {
        Self { source, max_pages }
    }

    /// Fetch and normalize the whole dataset.
    ///
    /// Pages are requested one at a time starting at 1; batch order and
    /// in-batch order are both preserved. Any failure aborts the whole
    /// ingestion and discards partial results.
    pub async fn fetch_all<R: Rng>(&self, rng: &mut R, now: DateTime<Utc>) -> Result<Vec<Job>> {
        let mut jobs = Vec::new();
        let mut page = 1u32;

        loop {
            let batch = self.source.fetch_page(page).await?;
            log::info!(
                "ingested page {}/{} ({} records)",
                batch.current_page,
                batch.last_page,
                batch.data.len()
            );

            let end_of_stream = !batch.has_next();
            jobs.extend(batch.data.into_iter().map(|raw| normalize(raw, rng, now)));

            if end_of_stream {
                break;
            }
            page += 1;
            if page > self.max_pages {
                log::warn!(
                    "page ceiling ({}) reached, stopping ingestion early",
                    self.max_pages
                );
                break;
            }
        }

        log::info!("ingestion complete: {} records", jobs.len());
        Ok(jobs)
    }

    /// Return the dataset, honoring the cache.
    ///
    /// A cache hit within the TTL returns the previously ingested
    /// collection without network access. On refresh the cache is only
    /// written after a fully successful fetch, so a failed retry leaves
    /// any prior entry untouched.
    pub async fn get_all<R: Rng>(
        &self,
        cache: &mut JobCache,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<Vec<Job>> {
        if let Some(cached) = cache.get(now) {
            log::debug!("cache hit: {} records", cached.len());
            return Ok(cached.to_vec());
        }

        let jobs = self.fetch_all(rng, now).await?;
        cache.store(jobs.clone(), now);
        Ok(jobs)
    }
}
