//! Job record data structures.

use serde::{Deserialize, Serialize};

/// A job record as it appears on the wire.
///
/// `openings` and `created_at` may be absent; the normalizer assigns
/// synthetic defaults so the rest of the pipeline can assume completeness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawJob {
    /// Stable identifier
    pub id: String,

    /// Posting title
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Company name
    pub company: String,

    /// Location label
    pub location: String,

    /// Lower bound of the advertised salary range
    pub salary_from: u32,

    /// Upper bound of the advertised salary range
    pub salary_to: u32,

    /// Employment type label (open vocabulary, e.g. "Full-Time")
    pub employment_type: String,

    /// Application deadline, ISO-8601 expected but may be malformed
    pub application_deadline: String,

    /// Either a JSON-encoded array of strings or a single opaque string
    pub qualifications: String,

    /// Email or phone, distinguished by presence of '@'
    pub contact: String,

    /// Category label (open vocabulary)
    pub job_category: String,

    /// Remote flag, 0 or 1 on the wire
    pub is_remote_work: u8,

    /// Number of open positions (may be absent)
    #[serde(default)]
    pub openings: Option<u32>,

    /// Creation timestamp (may be absent)
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Qualification payload, resolved once at normalization time.
///
/// The wire format is ambiguous: either a JSON-encoded array of strings
/// or a single opaque string. Parse failures degrade to `Text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Qualifications {
    /// A list of individual qualification entries
    List(Vec<String>),
    /// A single opaque text blob
    Text(String),
}

impl Qualifications {
    /// Resolve the wire payload into a tagged variant.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(items)) => Self::List(
                items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// View the payload as a list of entries; `Text` yields one entry.
    pub fn entries(&self) -> Vec<&str> {
        match self {
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Text(text) => vec![text.as_str()],
        }
    }
}

/// A normalized job record.
///
/// Invariant: `openings` and `created_at` are always concrete here; raw
/// records are repaired by the normalizer before anything downstream
/// sees them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary_from: u32,
    pub salary_to: u32,
    pub employment_type: String,
    pub application_deadline: String,
    pub qualifications: Qualifications,
    pub contact: String,
    pub job_category: String,

    /// Remote flag, kept as 0/1 (tri-state is not supported)
    pub is_remote_work: u8,

    pub openings: u32,
    pub created_at: String,
}

impl Job {
    /// Whether this posting is remote (`is_remote_work == 1`).
    pub fn is_remote(&self) -> bool {
        self.is_remote_work == 1
    }

    /// Whether the contact field looks like an email address.
    pub fn contact_is_email(&self) -> bool {
        self.contact.contains('@')
    }
}

/// One page of the paginated remote dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPage {
    /// Raw records in this batch, in source order
    pub data: Vec<RawJob>,

    /// 1-based index of this page
    pub current_page: u32,

    /// Index of the final page reported by the source
    pub last_page: u32,

    /// Records per page reported by the source
    pub per_page: u32,

    /// Total record count reported by the source
    pub total: u32,

    /// URL of the next page, None at end-of-stream
    #[serde(default)]
    pub next_page_url: Option<String>,

    /// URL of the previous page
    #[serde(default)]
    pub prev_page_url: Option<String>,
}

impl JobPage {
    /// Whether the source reports a page after this one.
    pub fn has_next(&self) -> bool {
        self.next_page_url.is_some() && self.current_page < self.last_page
    }
}
