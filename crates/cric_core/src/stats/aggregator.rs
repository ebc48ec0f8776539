use crate::error::MatchDataError;
use crate::models::MatchRecord;

use super::snapshot::StatsSnapshot;

/// Fold a match record into a statistics snapshot.
///
/// Single forward pass, per innings then per delivery. Each delivery
/// mutates only its own batsman/bowler/team keys, so ordering affects
/// iteration but not the resulting sums. Aggregates are created lazily
/// on first reference, zero-initialized.
///
/// Pure: no I/O, no shared state. The same record always produces the
/// same snapshot.
///
/// # Errors
///
/// `MatchDataError::EmptyMatch` when the record has no innings. Malformed
/// deliveries cannot reach this function; they are rejected with index
/// information at the ingestion boundary.
pub fn aggregate(record: &MatchRecord) -> Result<StatsSnapshot, MatchDataError> {
    if record.innings.is_empty() {
        return Err(MatchDataError::EmptyMatch);
    }

    let mut snapshot = StatsSnapshot::default();

    for innings in &record.innings {
        let team = innings.batting_team.as_str();

        for delivery in &innings.deliveries {
            let batting = snapshot.batting.entry(delivery.batsman.clone()).or_default();
            batting.runs += delivery.runs.batsman;
            batting.balls += 1;
            // Exact equality: only a literal 4 or 6 off the bat is a boundary.
            if delivery.runs.batsman == 4 {
                batting.fours += 1;
            }
            if delivery.runs.batsman == 6 {
                batting.sixes += 1;
            }

            let bowling = snapshot.bowling.entry(delivery.bowler.clone()).or_default();
            bowling.runs += delivery.runs.total;
            bowling.balls += 1;
            if delivery.wicket.is_some() {
                bowling.wickets += 1;
            }

            // Extras tally delivery occurrences per type, not run values.
            for kind in delivery.extras.keys() {
                *snapshot.extras.counts.entry(*kind).or_insert(0) += 1;
                snapshot.extras.total += 1;
            }

            *snapshot.team_scores.entry(team.to_string()).or_insert(0) +=
                delivery.runs.total;
        }
    }

    finalize_rates(&mut snapshot);
    Ok(snapshot)
}

/// Derived rate metrics, computed after all deliveries are folded.
///
/// Division is always guarded: a zero ball count yields a 0.0 rate, never
/// an error.
fn finalize_rates(snapshot: &mut StatsSnapshot) {
    for agg in snapshot.batting.values_mut() {
        agg.strike_rate = if agg.balls > 0 {
            round2(agg.runs as f64 / agg.balls as f64 * 100.0)
        } else {
            0.0
        };
    }

    for agg in snapshot.bowling.values_mut() {
        let overs = agg.balls as f64 / 6.0;
        agg.economy = if agg.balls > 0 { round2(agg.runs as f64 / overs) } else { 0.0 };
        agg.overs = round1(overs);
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
