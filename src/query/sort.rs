// src/query/sort.rs

//! Sort engine.
//!
//! Every order is total and stable: ties keep their original relative
//! order, never a secondary key.

use std::cmp::Reverse;

use crate::models::{Job, SortKey};
use crate::utils::date::parse_when;

/// Return a new sequence ordered by `key`.
pub fn apply_sort(jobs: &[Job], key: SortKey) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    match key {
        SortKey::Newest => sorted.sort_by_cached_key(|job| Reverse(timeline_stamp(job))),
        SortKey::Oldest => sorted.sort_by_cached_key(timeline_stamp),
        SortKey::SalaryHigh => sorted.sort_by_key(|job| Reverse(job.salary_to)),
        SortKey::SalaryLow => sorted.sort_by_key(|job| job.salary_from),
        SortKey::MostOpenings => sorted.sort_by_key(|job| Reverse(job.openings)),
    }
    sorted
}

/// Timestamp used by the newest/oldest orders.
///
/// `created_at` first, falling back to `application_deadline`;
/// unparseable records collapse to epoch and sort together.
fn timeline_stamp(job: &Job) -> i64 {
    parse_when(&job.created_at)
        .or_else(|| parse_when(&job.application_deadline))
        .map(|when| when.timestamp())
        .unwrap_or(0)
}
