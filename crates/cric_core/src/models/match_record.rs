use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Root entity: one parsed match. Constructed once by the ingestion
/// boundary and read-only during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub info: MatchInfo,
    pub innings: Vec<Innings>,
}

impl MatchRecord {
    /// Total number of deliveries across all innings.
    pub fn delivery_count(&self) -> usize {
        self.innings.iter().map(|i| i.deliveries.len()).sum()
    }
}

/// Match metadata from the cricsheet `info` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchInfo {
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl MatchInfo {
    /// Human-readable result line, e.g. "Sunrisers won by 35 runs".
    pub fn result_line(&self) -> String {
        let Some(outcome) = &self.outcome else {
            return "Result unknown".to_string();
        };
        let Some(winner) = &outcome.winner else {
            return "No result".to_string();
        };
        match &outcome.by {
            Some(WinMargin { runs: Some(runs), .. }) => format!("{winner} won by {runs} runs"),
            Some(WinMargin { wickets: Some(wickets), .. }) => {
                format!("{winner} won by {wickets} wickets")
            }
            _ => format!("{winner} won"),
        }
    }
}

/// Match outcome as recorded in the source log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<WinMargin>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WinMargin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wickets: Option<u32>,
}

/// One team's batting turn: an ordered sequence of deliveries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Innings {
    /// Source label, e.g. "1st innings".
    pub label: String,
    pub batting_team: String,
    pub deliveries: Vec<Delivery>,
}

/// One bowled ball and its full outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    /// Over.ball label from the source log, e.g. "0.1". Informational only.
    pub ball: String,
    pub batsman: String,
    pub bowler: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_striker: Option<String>,
    pub runs: RunsBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wicket: Option<WicketEvent>,
    /// Extra runs per extra type. Empty for a fair delivery.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<ExtraKind, u32>,
}

/// Runs scored off one delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunsBreakdown {
    pub batsman: u32,
    pub extras: u32,
    pub total: u32,
}

/// Wicket marker. Presence is what aggregation cares about; the details
/// are carried through for reporting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WicketEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_out: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fielders: Vec<String>,
}

/// Deliveries not credited to the batsman's personal tally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExtraKind {
    Wides,
    NoBalls,
    Byes,
    LegByes,
    Penalty,
}

impl ExtraKind {
    /// Parse a cricsheet extras tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "wides" => Some(Self::Wides),
            "noballs" => Some(Self::NoBalls),
            "byes" => Some(Self::Byes),
            "legbyes" => Some(Self::LegByes),
            "penalty" => Some(Self::Penalty),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Wides => "wides",
            Self::NoBalls => "noballs",
            Self::Byes => "byes",
            Self::LegByes => "legbyes",
            Self::Penalty => "penalty",
        }
    }
}

impl fmt::Display for ExtraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
