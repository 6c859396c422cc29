// src/models/mod.rs

//! Domain models for the job explorer.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod filters;
mod job;
mod query;

// Re-export all public types
pub use filters::{DEFAULT_SALARY_MAX, Filters};
pub use job::{Job, JobPage, Qualifications, RawJob};
pub use query::{QueryOutput, SortKey, ViewMode, ViewState};
