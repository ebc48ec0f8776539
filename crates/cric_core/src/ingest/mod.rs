//! Cricsheet YAML ingestion.
//!
//! Parses a ball-by-ball match log into a typed [`MatchRecord`],
//! validating at the boundary: a delivery missing its batsman, bowler,
//! or runs breakdown is rejected with its innings and delivery index
//! instead of surfacing as a missing-key fault deep inside aggregation.

mod cricsheet;

use std::fs;
use std::path::Path;

use crate::error::IngestError;
use crate::models::MatchRecord;

/// Parse a cricsheet YAML document.
pub fn parse_match(source: &str) -> Result<MatchRecord, IngestError> {
    let raw: cricsheet::RawMatch = serde_yaml::from_str(source)?;
    let record = cricsheet::into_record(raw)?;
    log::debug!(
        "parsed match: {} innings, {} deliveries",
        record.innings.len(),
        record.delivery_count()
    );
    Ok(record)
}

/// Read and parse a cricsheet YAML file.
pub fn load_match(path: &Path) -> Result<MatchRecord, IngestError> {
    let source = fs::read_to_string(path)?;
    parse_match(&source)
}
