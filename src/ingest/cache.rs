// src/ingest/cache.rs

//! Single-entry dataset cache.
//!
//! Holds the merged collection for a bounded time window so repeated
//! queries within a session avoid redundant network traffic. This is an
//! explicit owned object with an injected clock and TTL, not a
//! module-level singleton, so independent sessions and tests cannot
//! cross-contaminate.

use chrono::{DateTime, Duration, Utc};

use crate::models::Job;

/// Default time-to-live for the cached dataset.
pub const DEFAULT_TTL_SECS: i64 = 5 * 60;

#[derive(Debug, Clone)]
struct CacheEntry {
    jobs: Vec<Job>,
    stored_at: DateTime<Utc>,
}

/// Cache for the single merged job collection.
///
/// Overwrite semantics on refresh; a failed refresh never touches an
/// existing entry because callers only `store` on full success.
#[derive(Debug, Clone)]
pub struct JobCache {
    ttl: Duration,
    entry: Option<CacheEntry>,
}

impl JobCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn with_ttl_secs(secs: i64) -> Self {
        Self::new(Duration::seconds(secs))
    }

    /// Return the cached collection if it was stored within the TTL.
    pub fn get(&self, now: DateTime<Utc>) -> Option<&[Job]> {
        self.entry
            .as_ref()
            .filter(|entry| now - entry.stored_at < self.ttl)
            .map(|entry| entry.jobs.as_slice())
    }

    /// Replace the cached collection.
    pub fn store(&mut self, jobs: Vec<Job>, now: DateTime<Utc>) {
        self.entry = Some(CacheEntry {
            jobs,
            stored_at: now,
        });
    }

    /// Drop the cached collection.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

impl Default for JobCache {
    fn default() -> Self {
        Self::with_ttl_secs(DEFAULT_TTL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::Qualifications;

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: "Engineer".to_string(),
            description: String::new(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            salary_from: 40_000,
            salary_to: 60_000,
            employment_type: "Full-Time".to_string(),
            application_deadline: "2026-10-01".to_string(),
            qualifications: Qualifications::Text(String::new()),
            contact: "jobs@acme.test".to_string(),
            job_category: "Engineering".to_string(),
            is_remote_work: 0,
            openings: 1,
            created_at: "2026-08-01T00:00:00Z".to_string(),
        }
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, minute, 0).unwrap()
    }

    #[test]
    fn empty_cache_misses() {
        let cache = JobCache::default();
        assert!(cache.get(at(0)).is_none());
    }

    #[test]
    fn hit_within_ttl_miss_after_expiry() {
        let mut cache = JobCache::with_ttl_secs(300);
        cache.store(vec![job("a")], at(0));

        let hit = cache.get(at(4)).expect("entry within TTL");
        assert_eq!(hit.len(), 1);

        // Exactly at the TTL boundary the entry is stale
        assert!(cache.get(at(5)).is_none());
        assert!(cache.get(at(30)).is_none());
    }

    #[test]
    fn store_overwrites_previous_entry() {
        let mut cache = JobCache::with_ttl_secs(300);
        cache.store(vec![job("a")], at(0));
        cache.store(vec![job("b"), job("c")], at(1));

        let jobs = cache.get(at(2)).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id, "b");
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = JobCache::default();
        cache.store(vec![job("a")], at(0));
        cache.clear();
        assert!(cache.get(at(0)).is_none());
    }
}
