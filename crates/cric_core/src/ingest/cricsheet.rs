//! Raw cricsheet document shapes.
//!
//! The source format nests everything in single-key maps: each innings
//! is `{"1st innings": {...}}` and each delivery `{0.1: {...}}`, with
//! the over.ball key parsed by YAML as a number rather than a string.
//! All leaf fields are optional here; conversion to the typed model
//! rejects anything the aggregation contract requires.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::MatchDataError;
use crate::models::{
    Delivery, ExtraKind, Innings, MatchInfo, MatchRecord, Outcome, RunsBreakdown, WicketEvent,
    WinMargin,
};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawMatch {
    #[serde(default)]
    pub info: RawInfo,
    #[serde(default)]
    pub innings: Vec<BTreeMap<String, RawInnings>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawInfo {
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub outcome: Option<RawOutcome>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawOutcome {
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub by: Option<RawMargin>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawMargin {
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub wickets: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawInnings {
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub deliveries: Vec<HashMap<serde_yaml::Value, RawDelivery>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDelivery {
    #[serde(default)]
    pub batsman: Option<String>,
    #[serde(default)]
    pub bowler: Option<String>,
    #[serde(default)]
    pub non_striker: Option<String>,
    #[serde(default)]
    pub runs: Option<RawRuns>,
    #[serde(default)]
    pub wicket: Option<RawWicket>,
    #[serde(default)]
    pub extras: Option<BTreeMap<String, u32>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRuns {
    #[serde(default)]
    pub batsman: Option<u32>,
    #[serde(default)]
    pub extras: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawWicket {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub player_out: Option<String>,
    #[serde(default)]
    pub fielders: Vec<String>,
}

/// Validate a raw document into the typed model.
pub(crate) fn into_record(raw: RawMatch) -> Result<MatchRecord, MatchDataError> {
    let info = convert_info(raw.info);

    let mut innings = Vec::with_capacity(raw.innings.len());
    for (idx, entry) in raw.innings.into_iter().enumerate() {
        let Some((label, raw_innings)) = entry.into_iter().next() else {
            return Err(MatchDataError::MalformedInnings { innings: idx, field: "label" });
        };
        innings.push(convert_innings(idx, label, raw_innings)?);
    }

    Ok(MatchRecord { info, innings })
}

fn convert_info(raw: RawInfo) -> MatchInfo {
    let dates = raw
        .dates
        .iter()
        .filter_map(|text| match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                log::warn!("ignoring unparseable match date: {text:?}");
                None
            }
        })
        .collect();

    MatchInfo {
        teams: raw.teams,
        venue: raw.venue,
        city: raw.city,
        competition: raw.competition,
        dates,
        outcome: raw.outcome.map(|outcome| Outcome {
            winner: outcome.winner,
            by: outcome.by.map(|by| WinMargin { runs: by.runs, wickets: by.wickets }),
        }),
    }
}

fn convert_innings(
    idx: usize,
    label: String,
    raw: RawInnings,
) -> Result<Innings, MatchDataError> {
    let batting_team = raw
        .team
        .ok_or(MatchDataError::MalformedInnings { innings: idx, field: "team" })?;

    let mut deliveries = Vec::with_capacity(raw.deliveries.len());
    for (d_idx, entry) in raw.deliveries.into_iter().enumerate() {
        let Some((key, raw_delivery)) = entry.into_iter().next() else {
            return Err(MatchDataError::MalformedDelivery {
                innings: idx,
                delivery: d_idx,
                field: "ball",
            });
        };
        deliveries.push(convert_delivery(idx, d_idx, ball_label(&key), raw_delivery)?);
    }

    Ok(Innings { label, batting_team, deliveries })
}

fn convert_delivery(
    innings: usize,
    delivery: usize,
    ball: String,
    raw: RawDelivery,
) -> Result<Delivery, MatchDataError> {
    let missing =
        |field: &'static str| MatchDataError::MalformedDelivery { innings, delivery, field };

    let batsman = raw.batsman.ok_or_else(|| missing("batsman"))?;
    let bowler = raw.bowler.ok_or_else(|| missing("bowler"))?;
    let runs = raw.runs.ok_or_else(|| missing("runs"))?;
    let batsman_runs = runs.batsman.ok_or_else(|| missing("runs.batsman"))?;
    let total = runs.total.ok_or_else(|| missing("runs.total"))?;
    // The extras run value is derivable when the source omits it.
    let extras_runs = runs.extras.unwrap_or_else(|| total.saturating_sub(batsman_runs));

    let mut extras = BTreeMap::new();
    if let Some(raw_extras) = raw.extras {
        for (tag, value) in raw_extras {
            let Some(kind) = ExtraKind::from_tag(&tag) else {
                log::warn!("unknown extras tag {tag:?} at innings {innings}, delivery {delivery}");
                return Err(missing("extras"));
            };
            extras.insert(kind, value);
        }
    }

    Ok(Delivery {
        ball,
        batsman,
        bowler,
        non_striker: raw.non_striker,
        runs: RunsBreakdown { batsman: batsman_runs, extras: extras_runs, total },
        wicket: raw.wicket.map(|wicket| WicketEvent {
            kind: wicket.kind,
            player_out: wicket.player_out,
            fielders: wicket.fielders,
        }),
        extras,
    })
}

/// Over.ball labels arrive as YAML scalars; a numeric key like `0.1`
/// parses as a float, so the label is re-rendered here.
fn ball_label(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(text) => text.clone(),
        serde_yaml::Value::Number(number) => number.to_string(),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim().to_string())
            .unwrap_or_default(),
    }
}
