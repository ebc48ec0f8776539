use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::ExtraKind;

/// Per-batsman aggregate, keyed by batsman id in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingAggregate {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    /// Runs per 100 balls faced, 2dp. 0.0 when no balls were faced.
    pub strike_rate: f64,
}

/// Per-bowler aggregate, keyed by bowler id in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingAggregate {
    /// Runs conceded (delivery totals, so extras count against the bowler).
    pub runs: u32,
    pub balls: u32,
    pub wickets: u32,
    /// Balls bowled divided by six, 1dp.
    pub overs: f64,
    /// Runs conceded per over bowled, 2dp. 0.0 when no balls were bowled.
    pub economy: f64,
}

/// Deliveries carrying each extra type, plus a running total.
///
/// Counts delivery occurrences, not extra run values: a wide worth two
/// runs still increments `wides` and `total` by one each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtrasAggregate {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub counts: BTreeMap<ExtraKind, u32>,
    pub total: u32,
}

/// Sole output of one aggregation pass. Ordered maps keep snapshot
/// serialization and report tables deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub batting: BTreeMap<String, BattingAggregate>,
    pub bowling: BTreeMap<String, BowlingAggregate>,
    pub extras: ExtrasAggregate,
    pub team_scores: BTreeMap<String, u32>,
}

impl StatsSnapshot {
    /// Sum of all team totals.
    pub fn total_runs(&self) -> u32 {
        self.team_scores.values().sum()
    }

    /// Batting entries by runs scored, highest first. Ties resolve by
    /// name so the ordering is stable.
    pub fn top_batters(&self, n: usize) -> Vec<(&str, &BattingAggregate)> {
        let mut entries: Vec<_> =
            self.batting.iter().map(|(name, agg)| (name.as_str(), agg)).collect();
        entries.sort_by(|a, b| b.1.runs.cmp(&a.1.runs).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    /// Bowling entries by wickets taken, highest first, then fewest runs
    /// conceded, then name.
    pub fn top_bowlers(&self, n: usize) -> Vec<(&str, &BowlingAggregate)> {
        let mut entries: Vec<_> =
            self.bowling.iter().map(|(name, agg)| (name.as_str(), agg)).collect();
        entries.sort_by(|a, b| {
            b.1.wickets
                .cmp(&a.1.wickets)
                .then_with(|| a.1.runs.cmp(&b.1.runs))
                .then_with(|| a.0.cmp(b.0))
        });
        entries.truncate(n);
        entries
    }
}
