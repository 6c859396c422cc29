// src/query/mod.rs

//! Client-side query pipeline: filter, sort, window.
//!
//! `run_query` is the rendering boundary: a pure function of
//! (records, filters, sort, view, clock) with no state between calls,
//! safe to invoke at any rate with unchanged input.

pub mod filter;
pub mod options;
pub mod sort;
pub mod window;

use chrono::{DateTime, Utc};

use crate::models::{Filters, Job, QueryOutput, SortKey, ViewMode, ViewState};

pub use filter::apply_filters;
pub use options::{employment_types, job_categories, locations, unique_values};
pub use sort::apply_sort;
pub use window::{has_more, page_slice, prefix_slice, total_pages};

/// Run the full pipeline and produce the tuple the presentation layer
/// renders from.
pub fn run_query(
    jobs: &[Job],
    filters: &Filters,
    sort: SortKey,
    view: &ViewState,
    now: DateTime<Utc>,
) -> QueryOutput {
    let processed = apply_sort(&apply_filters(jobs, filters, now), sort);
    let total_filtered = processed.len();
    let total_pages = total_pages(total_filtered, view.page_size());

    let (visible, has_more) = match view.mode {
        ViewMode::Pagination => (
            page_slice(&processed, view.page_size(), view.page).to_vec(),
            false,
        ),
        ViewMode::Infinite => (
            prefix_slice(&processed, view.visible).to_vec(),
            window::has_more(view.visible, total_filtered),
        ),
    };

    QueryOutput {
        visible,
        total_filtered,
        total_pages,
        has_more,
    }
}

/// The filtered+sorted set without windowing.
///
/// This is what the export transformers consume: never the raw set,
/// never the paginated slice.
pub fn processed_set(
    jobs: &[Job],
    filters: &Filters,
    sort: SortKey,
    now: DateTime<Utc>,
) -> Vec<Job> {
    apply_sort(&apply_filters(jobs, filters, now), sort)
}
