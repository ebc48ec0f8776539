//! # cric_core - Cricket Match Statistics Engine
//!
//! This library ingests ball-by-ball cricket match logs (cricsheet YAML)
//! and folds them into per-player batting/bowling aggregates, extras
//! tallies, and team totals with derived rate metrics.
//!
//! ## Features
//! - Typed match records validated at the ingestion boundary
//! - Deterministic single-pass statistics aggregation (same record = same snapshot)
//! - Markdown report rendering and narrative prompt digests
//! - CSV dataset profiling for tabular inputs

pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
pub mod stats;
pub mod tabular;

// Re-export the main API surface
pub use error::{IngestError, MatchDataError, TabularError};
pub use ingest::{load_match, parse_match};
pub use models::{
    Delivery, ExtraKind, Innings, MatchInfo, MatchRecord, Outcome, RunsBreakdown, WicketEvent,
    WinMargin,
};
pub use report::{render_markdown, MatchDigest};
pub use stats::{
    aggregate, BattingAggregate, BowlingAggregate, ExtrasAggregate, StatsSnapshot,
};
pub use tabular::{profile_csv, ColumnProfile, CsvProfile, NumericSummary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
info:
  city: Hyderabad
  teams:
    - Sunrisers Hyderabad
    - Royal Challengers Bangalore
  outcome:
    winner: Sunrisers Hyderabad
    by:
      runs: 35
innings:
  - 1st innings:
      team: Sunrisers Hyderabad
      deliveries:
        - 0.1:
            batsman: DA Warner
            bowler: TS Mills
            runs: {batsman: 4, extras: 0, total: 4}
        - 0.2:
            batsman: DA Warner
            bowler: TS Mills
            runs: {batsman: 6, extras: 0, total: 6}
        - 0.3:
            batsman: DA Warner
            bowler: TS Mills
            runs: {batsman: 0, extras: 1, total: 1}
            extras: {wides: 1}
  - 2nd innings:
      team: Royal Challengers Bangalore
      deliveries:
        - 0.1:
            batsman: V Kohli
            bowler: B Kumar
            runs: {batsman: 0, extras: 0, total: 0}
            wicket: {kind: caught, player_out: V Kohli, fielders: [S Dhawan]}
"#;

    #[test]
    fn parse_aggregate_render_pipeline() {
        let record = parse_match(SAMPLE).expect("sample parses");
        let snapshot = aggregate(&record).expect("sample aggregates");

        assert_eq!(snapshot.team_scores["Sunrisers Hyderabad"], 11);
        assert_eq!(snapshot.team_scores["Royal Challengers Bangalore"], 0);
        assert_eq!(snapshot.total_runs(), 11);

        let warner = &snapshot.batting["DA Warner"];
        assert_eq!((warner.runs, warner.balls, warner.fours, warner.sixes), (10, 3, 1, 1));

        let kumar = &snapshot.bowling["B Kumar"];
        assert_eq!(kumar.wickets, 1);
        assert_eq!(kumar.economy, 0.0);

        let report = render_markdown(&record, &snapshot, None);
        assert!(report.contains("Sunrisers Hyderabad won by 35 runs"));
        assert!(report.contains("DA Warner"));
    }

    #[test]
    fn snapshot_serializes_to_stable_json() {
        let record = parse_match(SAMPLE).unwrap();
        let snapshot = aggregate(&record).unwrap();

        let first = serde_json::to_string(&snapshot).unwrap();
        let second = serde_json::to_string(&aggregate(&record).unwrap()).unwrap();
        assert_eq!(first, second);

        let parsed: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert!(parsed["batting"]["DA Warner"]["strike_rate"].is_number());
        assert_eq!(parsed["extras"]["counts"]["wides"], 1);
    }
}
