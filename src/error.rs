// src/error.rs

//! Unified error handling for the job explorer.

use std::fmt;

use thiserror::Error;

/// Result type alias for job explorer operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction or transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// PDF document assembly failed
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Ingestion request failed or returned a non-success status.
    ///
    /// Fatal to the current load: partial results are discarded and the
    /// only recovery is a full retry of ingestion.
    #[error("Network error: {message}")]
    Network {
        status: Option<u16>,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export error
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Create a network error with an optional HTTP status.
    pub fn network(status: Option<u16>, message: impl fmt::Display) -> Self {
        Self::Network {
            status,
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an export error.
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export(message.into())
    }
}
