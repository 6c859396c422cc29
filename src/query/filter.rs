// src/query/filter.rs

//! Filter engine.
//!
//! AND semantics across independent dimensions; an inactive predicate
//! always passes. Malformed dates never escape this module: a parse
//! failure simply does not disqualify the record.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Filters, Job};
use crate::utils::date::parse_when;

/// Return the subsequence of `jobs` satisfying every active predicate,
/// original relative order preserved.
pub fn apply_filters(jobs: &[Job], filters: &Filters, now: DateTime<Utc>) -> Vec<Job> {
    jobs.iter()
        .filter(|job| matches(job, filters, now))
        .cloned()
        .collect()
}

fn matches(job: &Job, filters: &Filters, now: DateTime<Utc>) -> bool {
    if !filters.search.is_empty() {
        let query = filters.search.to_lowercase();
        let hit = job.title.to_lowercase().contains(&query)
            || job.company.to_lowercase().contains(&query)
            || job.description.to_lowercase().contains(&query);
        if !hit {
            return false;
        }
    }

    if !filters.location.is_empty() && job.location != filters.location {
        return false;
    }

    if !filters.employment_types.is_empty()
        && !filters
            .employment_types
            .iter()
            .any(|t| *t == job.employment_type)
    {
        return false;
    }

    if !filters.job_category.is_empty() && job.job_category != filters.job_category {
        return false;
    }

    if filters.remote_only && job.is_remote_work != 1 {
        return false;
    }

    // Containment, not overlap: the record's whole salary range must lie
    // within the selected window.
    if job.salary_from < filters.salary_min || job.salary_to > filters.salary_max {
        return false;
    }

    if filters.min_openings > 0 && job.openings < filters.min_openings {
        return false;
    }

    if let Some(days) = filters.created_within {
        let cutoff = now - Duration::days(days);
        // Unparseable dates pass (fail open)
        if let Some(created) = parse_when(&job.created_at) {
            if created <= cutoff {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::Qualifications;

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: "Backend Engineer".to_string(),
            description: "Distributed systems work".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            salary_from: 50_000,
            salary_to: 70_000,
            employment_type: "Full-Time".to_string(),
            application_deadline: "2026-10-01".to_string(),
            qualifications: Qualifications::Text(String::new()),
            contact: "jobs@acme.test".to_string(),
            job_category: "Engineering".to_string(),
            is_remote_work: 0,
            openings: 3,
            created_at: "2026-08-20T00:00:00Z".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_filters_pass_everything_in_order() {
        let jobs = vec![job("a"), job("b"), job("c")];
        let out = apply_filters(&jobs, &Filters::default(), now());
        let ids: Vec<&str> = out.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let jobs = vec![job("a"), job("b")];
        let filters = Filters::default().with_search("engineer");
        let once = apply_filters(&jobs, &filters, now());
        let twice = apply_filters(&once, &filters, now());
        assert_eq!(once, twice);
    }

    #[test]
    fn search_is_case_insensitive_across_three_fields() {
        let mut by_title = job("t");
        by_title.title = "Senior RUST Developer".to_string();
        let mut by_company = job("c");
        by_company.title = "Developer".to_string();
        by_company.company = "Rustwerk GmbH".to_string();
        let mut by_description = job("d");
        by_description.title = "Developer".to_string();
        by_description.description = "We use rust daily".to_string();
        let mut miss = job("m");
        miss.title = "Gardener".to_string();
        miss.description = "Outdoor work".to_string();

        let jobs = vec![by_title, by_company, by_description, miss];
        let out = apply_filters(&jobs, &Filters::default().with_search("rust"), now());
        let ids: Vec<&str> = out.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["t", "c", "d"]);
    }

    #[test]
    fn employment_types_are_membership_tested() {
        let mut contract = job("x");
        contract.employment_type = "Contract".to_string();
        let jobs = vec![job("a"), contract, job("b")];

        let filters =
            Filters::default().with_employment_types(vec!["Full-Time".into(), "Internship".into()]);
        let out = apply_filters(&jobs, &filters, now());
        assert!(out.iter().all(|j| filters
            .employment_types
            .contains(&j.employment_type)));
        assert_eq!(out.len(), 2);

        // Empty set excludes nothing
        let all = apply_filters(&jobs, &Filters::default().with_employment_types(vec![]), now());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn salary_is_containment_not_overlap() {
        let mut overlapping = job("o");
        overlapping.salary_from = 40_000;
        overlapping.salary_to = 60_000;

        // The ranges overlap, but 40000 < 50000 puts the record outside
        // the selected window, so it is excluded.
        let filters = Filters::default().with_salary_range(50_000, 500_000);
        let out = apply_filters(&[overlapping], &filters, now());
        assert!(out.is_empty());

        let mut contained = job("c");
        contained.salary_from = 55_000;
        contained.salary_to = 60_000;
        let out = apply_filters(&[contained], &filters, now());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn salary_excluded_when_range_exceeds_max() {
        let mut high = job("h");
        high.salary_from = 60_000;
        high.salary_to = 90_000;
        let filters = Filters::default().with_salary_range(0, 80_000);
        assert!(apply_filters(&[high], &filters, now()).is_empty());
    }

    #[test]
    fn remote_only_checks_the_flag() {
        let mut remote = job("r");
        remote.is_remote_work = 1;
        let jobs = vec![job("a"), remote];
        let out = apply_filters(&jobs, &Filters::default().with_remote_only(true), now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "r");
    }

    #[test]
    fn min_openings_is_a_threshold() {
        let mut few = job("f");
        few.openings = 1;
        let jobs = vec![job("a"), few];
        let out = apply_filters(&jobs, &Filters::default().with_min_openings(2), now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");
    }

    #[test]
    fn created_within_is_a_strict_recency_window() {
        let mut recent = job("recent");
        recent.created_at = "2026-08-28T00:00:00Z".to_string();
        let mut old = job("old");
        old.created_at = "2026-07-01T00:00:00Z".to_string();

        let jobs = vec![recent, old];
        let out = apply_filters(&jobs, &Filters::default().with_created_within(Some(7)), now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "recent");
    }

    #[test]
    fn malformed_created_at_fails_open() {
        let mut garbled = job("g");
        garbled.created_at = "not-a-date".to_string();
        let out = apply_filters(
            &[garbled],
            &Filters::default().with_created_within(Some(7)),
            now(),
        );
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn predicates_combine_with_and() {
        let mut target = job("t");
        target.is_remote_work = 1;
        target.location = "Hamburg".to_string();
        let mut wrong_location = job("w");
        wrong_location.is_remote_work = 1;

        let filters = Filters::default()
            .with_remote_only(true)
            .with_location("Hamburg");
        let out = apply_filters(&[target, wrong_location], &filters, now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "t");
    }
}
