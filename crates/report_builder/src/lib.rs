//! Report Builder Library
//!
//! Match log -> statistics snapshot -> narrative digest -> markdown report.
//! CSV dataset -> profile -> narrative summary.

pub mod narrative;

use std::path::Path;

use anyhow::{Context, Result};

use cric_core::{aggregate, load_match, profile_csv, render_markdown};
use cric_core::{CsvProfile, MatchDigest, MatchRecord, StatsSnapshot};
use narrative::{NarrativeClient, NarrativeConfig};

/// Leaders kept in the narrative digest per discipline.
pub const DIGEST_LEADERS: usize = 3;

/// Everything one report run produces.
pub struct MatchReport {
    pub record: MatchRecord,
    pub snapshot: StatsSnapshot,
    pub narrative: Option<String>,
    pub markdown: String,
}

/// Run the full match-report pipeline.
///
/// A failing narrative backend degrades the report to tables-only (the
/// failure is logged); a malformed match log is fatal.
pub fn build_match_report(
    path: &Path,
    narrative: Option<&NarrativeConfig>,
) -> Result<MatchReport> {
    let record = load_match(path)
        .with_context(|| format!("failed to load match log {}", path.display()))?;
    let snapshot = aggregate(&record).context("statistics aggregation failed")?;

    let narrative_text = narrative.and_then(|config| {
        let digest = MatchDigest::new(&record.info, &snapshot, DIGEST_LEADERS);
        match generate_narrative(config, &digest.prompt()) {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("narrative generation failed: {err:#}");
                None
            }
        }
    });

    let markdown = render_markdown(&record, &snapshot, narrative_text.as_deref());
    Ok(MatchReport { record, snapshot, narrative: narrative_text, markdown })
}

/// Aggregate a match log without rendering.
pub fn build_snapshot(path: &Path) -> Result<StatsSnapshot> {
    let record = load_match(path)
        .with_context(|| format!("failed to load match log {}", path.display()))?;
    aggregate(&record).context("statistics aggregation failed")
}

/// CSV profile plus optional narrative summary.
pub struct CsvSummary {
    pub profile: CsvProfile,
    pub narrative: Option<String>,
}

pub fn build_csv_summary(
    path: &Path,
    narrative: Option<&NarrativeConfig>,
) -> Result<CsvSummary> {
    let profile = profile_csv(path)
        .with_context(|| format!("failed to profile {}", path.display()))?;

    let narrative_text = narrative.and_then(|config| {
        match generate_narrative(config, &profile.prompt()) {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("narrative generation failed: {err:#}");
                None
            }
        }
    });

    Ok(CsvSummary { profile, narrative: narrative_text })
}

fn generate_narrative(config: &NarrativeConfig, prompt: &str) -> Result<String> {
    NarrativeClient::new(config.clone())?.generate(prompt)
}
