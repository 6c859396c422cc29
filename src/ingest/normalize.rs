// src/ingest/normalize.rs

//! Record normalization.
//!
//! Repairs raw records with synthetic defaults so everything downstream
//! can assume `openings` and `created_at` are present. The defaults are
//! random by design; the random source and clock are injected parameters
//! so tests can pin them.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;

use crate::models::{Job, Qualifications, RawJob};

/// Upper bound (inclusive) for a synthetic `openings` value.
pub const SYNTHETIC_OPENINGS_MAX: u32 = 10;

/// A synthetic `created_at` falls within this many days before `now`.
pub const SYNTHETIC_AGE_DAYS: i64 = 60;

/// Repair one raw record into a complete `Job`.
///
/// Missing `openings` gets a uniform integer in `[1, 10]`; missing
/// `created_at` gets a timestamp uniformly sampled within the last 60
/// days before `now`. The qualifications payload is resolved once here.
/// No other field is mutated or validated.
pub fn normalize(raw: RawJob, rng: &mut impl Rng, now: DateTime<Utc>) -> Job {
    let openings = raw
        .openings
        .unwrap_or_else(|| rng.gen_range(1..=SYNTHETIC_OPENINGS_MAX));

    let created_at = raw.created_at.unwrap_or_else(|| {
        let age_secs = rng.gen_range(0..SYNTHETIC_AGE_DAYS * 86_400);
        (now - Duration::seconds(age_secs)).to_rfc3339_opts(SecondsFormat::Secs, true)
    });

    Job {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        company: raw.company,
        location: raw.location,
        salary_from: raw.salary_from,
        salary_to: raw.salary_to,
        employment_type: raw.employment_type,
        application_deadline: raw.application_deadline,
        qualifications: Qualifications::parse(&raw.qualifications),
        contact: raw.contact,
        job_category: raw.job_category,
        is_remote_work: raw.is_remote_work,
        openings,
        created_at,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::utils::date::parse_when;

    fn sample_raw() -> RawJob {
        RawJob {
            id: "j1".to_string(),
            title: "Engineer".to_string(),
            description: "Build things".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            salary_from: 40_000,
            salary_to: 60_000,
            employment_type: "Full-Time".to_string(),
            application_deadline: "2026-10-01".to_string(),
            qualifications: r#"["Rust","SQL"]"#.to_string(),
            contact: "jobs@acme.test".to_string(),
            job_category: "Engineering".to_string(),
            is_remote_work: 0,
            openings: None,
            created_at: None,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn present_fields_are_untouched() {
        let mut rng = StdRng::seed_from_u64(7);
        let raw = RawJob {
            openings: Some(4),
            created_at: Some("2026-08-01T00:00:00Z".to_string()),
            ..sample_raw()
        };
        let job = normalize(raw, &mut rng, fixed_now());
        assert_eq!(job.openings, 4);
        assert_eq!(job.created_at, "2026-08-01T00:00:00Z");
        assert_eq!(job.salary_from, 40_000);
    }

    #[test]
    fn synthetic_openings_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let job = normalize(sample_raw(), &mut rng, fixed_now());
            assert!((1..=SYNTHETIC_OPENINGS_MAX).contains(&job.openings));
        }
    }

    #[test]
    fn synthetic_created_at_within_sixty_days() {
        let now = fixed_now();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let job = normalize(sample_raw(), &mut rng, now);
            let created = parse_when(&job.created_at).expect("synthetic timestamp must parse");
            assert!(created <= now);
            assert!(created > now - Duration::days(SYNTHETIC_AGE_DAYS));
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let now = fixed_now();
        let a = normalize(sample_raw(), &mut StdRng::seed_from_u64(1), now);
        let b = normalize(sample_raw(), &mut StdRng::seed_from_u64(1), now);
        assert_eq!(a, b);
    }

    #[test]
    fn qualifications_resolved_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let job = normalize(sample_raw(), &mut rng, fixed_now());
        assert_eq!(
            job.qualifications,
            Qualifications::List(vec!["Rust".into(), "SQL".into()])
        );
    }
}
