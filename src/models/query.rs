//! Sort keys, view modes, and window state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Job;

/// One of the five named total orders over the record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// By creation time, newest first
    #[default]
    Newest,
    /// By creation time, oldest first
    Oldest,
    /// By salary upper bound, descending
    SalaryHigh,
    /// By salary lower bound, ascending
    SalaryLow,
    /// By number of openings, descending
    MostOpenings,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::SalaryHigh => "salary_high",
            Self::SalaryLow => "salary_low",
            Self::MostOpenings => "most_openings",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "salary_high" => Ok(Self::SalaryHigh),
            "salary_low" => Ok(Self::SalaryLow),
            "most_openings" => Ok(Self::MostOpenings),
            other => Err(AppError::validation(format!("unknown sort key: {other}"))),
        }
    }
}

/// Windowing mode; the two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Fixed-size pages addressed by a 1-based index
    #[default]
    Pagination,
    /// A growable prefix of the ordered set
    Infinite,
}

/// Current window over the filtered+sorted set.
///
/// Owned by the calling context; any filter or sort change must `reset()`
/// it, since the window is always relative to the current result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,

    /// 1-based page index (pagination mode)
    pub page: usize,

    /// Number of records currently visible (infinite mode)
    pub visible: usize,

    page_size: usize,
    batch: usize,
}

impl ViewState {
    pub fn new(mode: ViewMode, page_size: usize, batch: usize) -> Self {
        Self {
            mode,
            page: 1,
            visible: batch,
            page_size,
            batch,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Grow the visible prefix by one batch, clamped at `total`.
    ///
    /// Idempotent once everything is visible: calling again is a no-op,
    /// not an error.
    pub fn load_more(&mut self, total: usize) {
        if self.visible < total {
            self.visible = (self.visible + self.batch).min(total);
        }
    }

    /// Restore page 1 and the initial batch size.
    pub fn reset(&mut self) {
        self.page = 1;
        self.visible = self.batch;
    }
}

/// What the core hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    /// Records in the current window, in final order
    pub visible: Vec<Job>,

    /// Size of the whole filtered set
    pub total_filtered: usize,

    /// Page count for pagination mode
    pub total_pages: usize,

    /// Whether infinite mode has records beyond the visible prefix
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_round_trips_through_str() {
        for key in [
            SortKey::Newest,
            SortKey::Oldest,
            SortKey::SalaryHigh,
            SortKey::SalaryLow,
            SortKey::MostOpenings,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("salary".parse::<SortKey>().is_err());
    }

    #[test]
    fn load_more_grows_clamps_and_saturates() {
        let mut view = ViewState::new(ViewMode::Infinite, 9, 9);
        assert_eq!(view.visible, 9);

        view.load_more(20);
        assert_eq!(view.visible, 18);

        view.load_more(20);
        assert_eq!(view.visible, 20);

        // Exhausted: further calls are no-ops
        view.load_more(20);
        assert_eq!(view.visible, 20);
    }

    #[test]
    fn reset_restores_initial_window() {
        let mut view = ViewState::new(ViewMode::Pagination, 9, 9);
        view.set_page(4);
        view.load_more(100);
        view.reset();
        assert_eq!(view.page, 1);
        assert_eq!(view.visible, 9);
    }
}
