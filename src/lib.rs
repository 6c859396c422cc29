// src/lib.rs

//! Windmark Job Explorer Library

pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod query;
pub mod utils;
