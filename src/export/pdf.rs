// src/export/pdf.rs

//! Tabular PDF export.
//!
//! Renders the filtered+sorted set as a landscape A4 document: a title,
//! a bulleted description of every active filter, the table itself
//! flowing across pages, and a per-page footer with the generation
//! timestamp, total count, and page numbers.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::error::Result;
use crate::models::{Filters, Job};
use crate::utils::fmt::format_salary_full;

// A4 landscape, in points
const PAGE_WIDTH: f32 = 842.0;
const PAGE_HEIGHT: f32 = 595.0;
const MARGIN: f32 = 40.0;
const FOOTER_Y: f32 = 24.0;
const ROW_HEIGHT: f32 = 13.0;
const BODY_SIZE: f32 = 8.0;

/// Column layout: label, left edge, character budget.
const COLUMNS: [(&str, f32, usize); 8] = [
    ("Title", 40.0, 30),
    ("Company", 180.0, 20),
    ("Location", 278.0, 17),
    ("Salary Range", 362.0, 21),
    ("Type", 468.0, 14),
    ("Category", 542.0, 17),
    ("Remote", 628.0, 6),
    ("Openings", 688.0, 8),
];

/// Render the filtered+sorted set as PDF bytes.
///
/// The document is produced entirely in memory; writing it anywhere is
/// the caller's concern.
pub fn to_pdf(jobs: &[Job], filters: &Filters, generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let pages = layout_pages(jobs, filters);
    let page_total = pages.len();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(page_total);
    for (index, mut ops) in pages.into_iter().enumerate() {
        footer(&mut ops, index + 1, page_total, jobs.len(), generated_at);

        let content = Content { operations: ops };
        let stream_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => stream_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_total as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Output filename for the document export, timestamp-suffixed.
pub fn pdf_filename(now: DateTime<Utc>) -> String {
    format!("job-results-{}.pdf", now.timestamp_millis())
}

/// Lay the header block and table out into per-page operation lists.
fn layout_pages(jobs: &[Job], filters: &Filters) -> Vec<Vec<Operation>> {
    let mut pages = Vec::new();
    let mut ops = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN - 10.0;

    text(&mut ops, "F2", 20.0, MARGIN, y, "Filtered Job Results");
    y -= 22.0;

    let active = filters.describe();
    if active.is_empty() {
        text(&mut ops, "F1", 10.0, MARGIN, y, "No active filters applied.");
        y -= 14.0;
    } else {
        text(&mut ops, "F2", 10.0, MARGIN, y, "Applied Filters:");
        y -= 13.0;
        for line in &active {
            text(&mut ops, "F1", 9.0, MARGIN + 8.0, y, &format!("- {line}"));
            y -= 11.0;
        }
    }
    y -= 8.0;

    table_header(&mut ops, y);
    y -= ROW_HEIGHT;

    for job in jobs {
        if y < MARGIN + 20.0 {
            pages.push(std::mem::take(&mut ops));
            y = PAGE_HEIGHT - MARGIN;
            table_header(&mut ops, y);
            y -= ROW_HEIGHT;
        }
        table_row(&mut ops, y, job);
        y -= ROW_HEIGHT;
    }

    pages.push(ops);
    pages
}

fn table_header(ops: &mut Vec<Operation>, y: f32) {
    for (label, x, _) in COLUMNS {
        text(ops, "F2", BODY_SIZE, x, y, label);
    }
}

fn table_row(ops: &mut Vec<Operation>, y: f32, job: &Job) {
    let salary = format!(
        "{} - {}",
        format_salary_full(job.salary_from),
        format_salary_full(job.salary_to)
    );
    let openings = job.openings.to_string();
    let cells: [&str; 8] = [
        &job.title,
        &job.company,
        &job.location,
        &salary,
        &job.employment_type,
        &job.job_category,
        if job.is_remote() { "Yes" } else { "No" },
        &openings,
    ];
    for ((_, x, budget), cell) in COLUMNS.into_iter().zip(cells) {
        text(ops, "F1", BODY_SIZE, x, y, &clip(cell, budget));
    }
}

fn footer(
    ops: &mut Vec<Operation>,
    page: usize,
    page_total: usize,
    result_total: usize,
    generated_at: DateTime<Utc>,
) {
    let left = format!(
        "Generated: {}  |  Total Results: {}  |  Page {} of {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        result_total,
        page,
        page_total
    );
    text(ops, "F1", BODY_SIZE, MARGIN, FOOTER_Y, &left);

    let brand = "Windmark Job Portal";
    // Approximate right alignment from average Helvetica glyph width
    let brand_width = brand.len() as f32 * BODY_SIZE * 0.5;
    text(
        ops,
        "F1",
        BODY_SIZE,
        PAGE_WIDTH - MARGIN - brand_width,
        FOOTER_Y,
        brand,
    );
}

fn text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, value: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::string_literal(ascii(value))],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Truncate a cell to its character budget, marking the cut.
fn clip(value: &str, budget: usize) -> String {
    if value.chars().count() <= budget {
        return value.to_string();
    }
    let kept: String = value.chars().take(budget.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// The base fonts are not Unicode-aware; substitute anything outside
/// printable ASCII.
fn ascii(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}
