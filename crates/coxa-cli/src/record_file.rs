//! Measurement record loading from JSON files.
//!
//! The record file is the CLI's input artifact only; the core never
//! persists anything. Missing parameters and sides keep their defaults,
//! so a partially filled file is valid.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use coxa_model::MeasurementRecord;

/// Parses a record from JSON text.
pub fn parse_record(json: &str) -> Result<MeasurementRecord> {
    serde_json::from_str(json).context("parse measurement record")
}

/// Loads a record from a JSON file.
pub fn load_record(path: &Path) -> Result<MeasurementRecord> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("read record file {}", path.display()))?;
    parse_record(&json).with_context(|| format!("invalid record file {}", path.display()))
}
