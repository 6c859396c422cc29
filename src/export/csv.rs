// src/export/csv.rs

//! Delimited text export.
//!
//! One header row plus one row per record, fields in a fixed column
//! order. Text fields are quote-wrapped as-is; embedded quote characters
//! are NOT escaped, which can corrupt the output for adversarial input.
//! That is a documented limitation of this format, preserved on purpose.

use crate::models::Job;

/// Fixed column order of the export.
pub const CSV_HEADERS: [&str; 10] = [
    "Title",
    "Company",
    "Location",
    "Salary From",
    "Salary To",
    "Employment Type",
    "Job Category",
    "Remote",
    "Openings",
    "Created At",
];

/// Render the filtered+sorted set as delimited text.
pub fn to_csv(jobs: &[Job]) -> String {
    let mut lines = Vec::with_capacity(jobs.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for job in jobs {
        lines.push(format!(
            "\"{}\",\"{}\",\"{}\",{},{},\"{}\",\"{}\",{},{},{}",
            job.title,
            job.company,
            job.location,
            job.salary_from,
            job.salary_to,
            job.employment_type,
            job.job_category,
            if job.is_remote() { "Yes" } else { "No" },
            job.openings,
            job.created_at,
        ));
    }

    lines.join("\n")
}

/// Output filename for the delimited export.
pub fn csv_filename(basename: &str) -> String {
    format!("{basename}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Qualifications;

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: "Backend Engineer".to_string(),
            description: "irrelevant for csv".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            salary_from: 40_000,
            salary_to: 60_000,
            employment_type: "Full-Time".to_string(),
            application_deadline: "2026-10-01".to_string(),
            qualifications: Qualifications::Text(String::new()),
            contact: "jobs@acme.test".to_string(),
            job_category: "Engineering".to_string(),
            is_remote_work: 1,
            openings: 3,
            created_at: "2026-08-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn header_row_round_trips_in_fixed_order() {
        let csv = to_csv(&[job("a")]);
        let header = csv.lines().next().unwrap();
        let columns: Vec<&str> = header.split(',').collect();
        assert_eq!(columns, CSV_HEADERS);
    }

    #[test]
    fn one_row_per_record_after_the_header() {
        let csv = to_csv(&[job("a"), job("b"), job("c")]);
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn row_renders_fields_in_order() {
        let csv = to_csv(&[job("a")]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"Backend Engineer\",\"Acme\",\"Berlin\",40000,60000,\
             \"Full-Time\",\"Engineering\",Yes,3,2026-08-01T00:00:00Z"
        );
    }

    #[test]
    fn remote_flag_renders_yes_no() {
        let mut onsite = job("o");
        onsite.is_remote_work = 0;
        let csv = to_csv(&[onsite]);
        assert!(csv.lines().nth(1).unwrap().contains(",No,"));
    }

    #[test]
    fn embedded_quotes_pass_through_unescaped() {
        // Known limitation: the quote is wrapped, not doubled.
        let mut tricky = job("q");
        tricky.title = r#"Senior "Rockstar" Dev"#.to_string();
        let csv = to_csv(&[tricky]);
        assert!(csv.contains(r#""Senior "Rockstar" Dev""#));
    }

    #[test]
    fn empty_set_is_just_the_header() {
        assert_eq!(to_csv(&[]), CSV_HEADERS.join(","));
    }

    #[test]
    fn filename_appends_extension() {
        assert_eq!(csv_filename("filtered-jobs"), "filtered-jobs.csv");
    }
}
