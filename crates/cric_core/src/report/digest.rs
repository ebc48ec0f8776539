use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::MatchInfo;
use crate::stats::{BattingAggregate, BowlingAggregate, ExtrasAggregate, StatsSnapshot};

/// Compact match summary serialized into the narrative-backend prompt.
#[derive(Debug, Clone, Serialize)]
pub struct MatchDigest {
    pub teams: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub result: String,
    pub team_scores: BTreeMap<String, u32>,
    pub batting_leaders: Vec<BattingLeader>,
    pub bowling_leaders: Vec<BowlingLeader>,
    pub extras: ExtrasAggregate,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattingLeader {
    pub name: String,
    #[serde(flatten)]
    pub stats: BattingAggregate,
}

#[derive(Debug, Clone, Serialize)]
pub struct BowlingLeader {
    pub name: String,
    #[serde(flatten)]
    pub stats: BowlingAggregate,
}

impl MatchDigest {
    /// Summarize a snapshot, keeping the top `leaders` entries per
    /// discipline.
    pub fn new(info: &MatchInfo, snapshot: &StatsSnapshot, leaders: usize) -> Self {
        Self {
            teams: info.teams.clone(),
            venue: info.venue.clone(),
            city: info.city.clone(),
            competition: info.competition.clone(),
            date: info.dates.first().map(|d| d.to_string()),
            result: info.result_line(),
            team_scores: snapshot.team_scores.clone(),
            batting_leaders: snapshot
                .top_batters(leaders)
                .into_iter()
                .map(|(name, stats)| BattingLeader {
                    name: name.to_string(),
                    stats: stats.clone(),
                })
                .collect(),
            bowling_leaders: snapshot
                .top_bowlers(leaders)
                .into_iter()
                .map(|(name, stats)| BowlingLeader {
                    name: name.to_string(),
                    stats: stats.clone(),
                })
                .collect(),
            extras: snapshot.extras.clone(),
        }
    }

    /// Narrative-backend prompt: the serialized digest plus the analysis
    /// outline the report expects back.
    pub fn prompt(&self) -> String {
        let digest = serde_json::to_string_pretty(self).expect("digest serializes to JSON");
        format!(
            "Analyze this cricket match data:\n{digest}\n\n\
             Provide a detailed match report including:\n\
             1. Match overview and result\n\
             2. Key batting performances\n\
             3. Key bowling performances\n\
             4. Analysis of extras\n\
             5. Turning points in the match\n\n\
             Use markdown formatting with cricket terminology."
        )
    }
}
