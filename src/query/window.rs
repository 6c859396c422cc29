// src/query/window.rs

//! Pagination and infinite-scroll windowing.

use crate::models::Job;

/// Slice out one fixed-size page; `page` is 1-based.
///
/// Out-of-range indices (including page 0) yield an empty slice, never
/// an error.
pub fn page_slice(jobs: &[Job], page_size: usize, page: usize) -> &[Job] {
    if page_size == 0 || page == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= jobs.len() {
        return &[];
    }
    let end = (start + page_size).min(jobs.len());
    &jobs[start..end]
}

/// Number of pages needed to cover `count` records.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// The first `visible` records, clamped to the collection length.
pub fn prefix_slice(jobs: &[Job], visible: usize) -> &[Job] {
    &jobs[..visible.min(jobs.len())]
}

/// Whether infinite mode has records beyond the visible prefix.
pub fn has_more(visible: usize, total: usize) -> bool {
    visible < total
}
