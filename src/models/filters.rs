//! Filter value object.

use serde::{Deserialize, Serialize};

use crate::utils::fmt::format_salary_full;

/// Default upper bound of the salary range filter.
pub const DEFAULT_SALARY_MAX: u32 = 500_000;

/// Immutable set of predicates describing which records should be visible.
///
/// Each field is one filter dimension; an empty/zero/None value means the
/// dimension is inactive and passes everything. Mutations go through the
/// `with_*` builders, which return a new value, so query output is always
/// a pure function of (records, filters).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filters {
    /// Case-insensitive substring match against title, company, description
    pub search: String,

    /// Exact-match location
    pub location: String,

    /// Accepted employment types; empty = accept all
    pub employment_types: Vec<String>,

    /// Exact-match category
    pub job_category: String,

    /// Only records with `is_remote_work == 1`
    pub remote_only: bool,

    /// Lower bound of the accepted salary window
    pub salary_min: u32,

    /// Upper bound of the accepted salary window
    pub salary_max: u32,

    /// Minimum number of openings; 0 = inactive
    pub min_openings: u32,

    /// Day-count recency window; None = no constraint
    pub created_within: Option<i64>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: String::new(),
            employment_types: Vec::new(),
            job_category: String::new(),
            remote_only: false,
            salary_min: 0,
            salary_max: DEFAULT_SALARY_MAX,
            min_openings: 0,
            created_within: None,
        }
    }
}

impl Filters {
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self
        }
    }

    pub fn with_employment_types(self, employment_types: Vec<String>) -> Self {
        Self {
            employment_types,
            ..self
        }
    }

    pub fn with_job_category(self, job_category: impl Into<String>) -> Self {
        Self {
            job_category: job_category.into(),
            ..self
        }
    }

    pub fn with_remote_only(self, remote_only: bool) -> Self {
        Self {
            remote_only,
            ..self
        }
    }

    pub fn with_salary_range(self, salary_min: u32, salary_max: u32) -> Self {
        Self {
            salary_min,
            salary_max,
            ..self
        }
    }

    pub fn with_min_openings(self, min_openings: u32) -> Self {
        Self {
            min_openings,
            ..self
        }
    }

    pub fn with_created_within(self, created_within: Option<i64>) -> Self {
        Self {
            created_within,
            ..self
        }
    }

    /// Whether the salary window differs from its full default span.
    pub fn salary_active(&self) -> bool {
        self.salary_min > 0 || self.salary_max < DEFAULT_SALARY_MAX
    }

    /// Number of active filter dimensions.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.search.is_empty() {
            count += 1;
        }
        if !self.location.is_empty() {
            count += 1;
        }
        if !self.employment_types.is_empty() {
            count += 1;
        }
        if !self.job_category.is_empty() {
            count += 1;
        }
        if self.remote_only {
            count += 1;
        }
        if self.salary_active() {
            count += 1;
        }
        if self.min_openings > 0 {
            count += 1;
        }
        if self.created_within.is_some() {
            count += 1;
        }
        count
    }

    /// Human-readable description of every active filter, one line each.
    ///
    /// Used for the PDF header block and the CLI summary.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.search.is_empty() {
            lines.push(format!("Search: \"{}\"", self.search));
        }
        if !self.location.is_empty() {
            lines.push(format!("Location: {}", self.location));
        }
        if !self.employment_types.is_empty() {
            lines.push(format!(
                "Employment Types: {}",
                self.employment_types.join(", ")
            ));
        }
        if !self.job_category.is_empty() {
            lines.push(format!("Category: {}", self.job_category));
        }
        if self.remote_only {
            lines.push("Remote Only: Yes".to_string());
        }
        if self.salary_active() {
            lines.push(format!(
                "Salary: {} - {}",
                format_salary_full(self.salary_min),
                format_salary_full(self.salary_max)
            ));
        }
        if self.min_openings > 0 {
            lines.push(format!("Min Openings: {}", self.min_openings));
        }
        if let Some(days) = self.created_within {
            lines.push(format!("Created Within: {days} days"));
        }
        lines
    }
}
