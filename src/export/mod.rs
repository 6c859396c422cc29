// src/export/mod.rs

//! Export transformers.
//!
//! Both transformers consume the filtered+sorted set produced by
//! `query::processed_set`, never the raw or paginated set, so the files
//! a user downloads always match what the active query describes.

pub mod csv;
pub mod guard;
pub mod pdf;

pub use csv::{CSV_HEADERS, csv_filename, to_csv};
pub use guard::{ExportGuard, ExportLock};
pub use pdf::{pdf_filename, to_pdf};
