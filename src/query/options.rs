// src/query/options.rs

//! Filter option sets derived from observed values.
//!
//! The categorical dimensions are open vocabularies, so the choices
//! offered for location, employment type, and category come from the
//! dataset itself.

use std::collections::BTreeSet;

use crate::models::Job;

/// Distinct non-empty values of one field, sorted.
pub fn unique_values<'a, F>(jobs: &'a [Job], field: F) -> Vec<String>
where
    F: Fn(&'a Job) -> &'a str,
{
    jobs.iter()
        .map(|job| field(job))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn locations(jobs: &[Job]) -> Vec<String> {
    unique_values(jobs, |job| job.location.as_str())
}

pub fn employment_types(jobs: &[Job]) -> Vec<String> {
    unique_values(jobs, |job| job.employment_type.as_str())
}

pub fn job_categories(jobs: &[Job]) -> Vec<String> {
    unique_values(jobs, |job| job.job_category.as_str())
}
