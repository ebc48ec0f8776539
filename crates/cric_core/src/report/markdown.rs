use std::fmt::Write as _;

use crate::models::MatchRecord;
use crate::stats::StatsSnapshot;

/// Players shown in the batting/bowling tables.
const TABLE_ROWS: usize = 5;

/// Render the full markdown match report.
///
/// Section order follows the PDF layout the report replaces: cover
/// header, expert analysis (when a narrative is supplied), team
/// comparison, batting and bowling tables, extras summary.
pub fn render_markdown(
    record: &MatchRecord,
    snapshot: &StatsSnapshot,
    narrative: Option<&str>,
) -> String {
    let mut out = String::new();
    let info = &record.info;

    let _ = writeln!(out, "# Cricket Match Report");
    let _ = writeln!(out);
    if !info.teams.is_empty() {
        let _ = writeln!(out, "**{}**", info.teams.join(" vs "));
    }
    let mut venue_line = Vec::new();
    if let Some(venue) = &info.venue {
        venue_line.push(venue.clone());
    }
    if let Some(city) = &info.city {
        venue_line.push(city.clone());
    }
    if let Some(date) = info.dates.first() {
        venue_line.push(date.to_string());
    }
    if !venue_line.is_empty() {
        let _ = writeln!(out, "{}", venue_line.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Result: {}", info.result_line());
    let _ = writeln!(out);

    if let Some(text) = narrative {
        let _ = writeln!(out, "## Expert Analysis");
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", text.trim());
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Team Comparison");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Team | Runs |");
    let _ = writeln!(out, "| --- | ---: |");
    for (team, runs) in &snapshot.team_scores {
        let _ = writeln!(out, "| {team} | {runs} |");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Batting Performance");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Batsman | Runs | Balls | 4s | 6s | SR |");
    let _ = writeln!(out, "| --- | ---: | ---: | ---: | ---: | ---: |");
    for (name, agg) in snapshot.top_batters(TABLE_ROWS) {
        let _ = writeln!(
            out,
            "| {name} | {} | {} | {} | {} | {:.2} |",
            agg.runs, agg.balls, agg.fours, agg.sixes, agg.strike_rate
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Bowling Performance");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Bowler | Overs | Runs | Wickets | Economy |");
    let _ = writeln!(out, "| --- | ---: | ---: | ---: | ---: |");
    for (name, agg) in snapshot.top_bowlers(TABLE_ROWS) {
        let _ = writeln!(
            out,
            "| {name} | {:.1} | {} | {} | {:.2} |",
            agg.overs, agg.runs, agg.wickets, agg.economy
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Extras");
    let _ = writeln!(out);
    if snapshot.extras.counts.is_empty() {
        let _ = writeln!(out, "No extras were conceded.");
    } else {
        for (kind, count) in &snapshot.extras.counts {
            let _ = writeln!(out, "- {kind}: {count} deliveries");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total deliveries with extras: {}", snapshot.extras.total);
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{Delivery, ExtraKind, Innings, MatchInfo, RunsBreakdown};
    use crate::stats::aggregate;

    fn sample_record() -> MatchRecord {
        let delivery = |batsman: &str, bowler: &str, runs: u32| Delivery {
            ball: "0.1".to_string(),
            batsman: batsman.to_string(),
            bowler: bowler.to_string(),
            non_striker: None,
            runs: RunsBreakdown { batsman: runs, extras: 0, total: runs },
            wicket: None,
            extras: BTreeMap::new(),
        };

        let mut wide = delivery("Warner", "Mills", 0);
        wide.runs = RunsBreakdown { batsman: 0, extras: 1, total: 1 };
        wide.extras.insert(ExtraKind::Wides, 1);

        MatchRecord {
            info: MatchInfo {
                teams: vec!["Sunrisers".to_string(), "Challengers".to_string()],
                city: Some("Hyderabad".to_string()),
                ..Default::default()
            },
            innings: vec![Innings {
                label: "1st innings".to_string(),
                batting_team: "Sunrisers".to_string(),
                deliveries: vec![
                    delivery("Warner", "Mills", 4),
                    delivery("Dhawan", "Mills", 1),
                    wide,
                ],
            }],
        }
    }

    #[test]
    fn report_contains_all_sections() {
        let record = sample_record();
        let snapshot = aggregate(&record).unwrap();
        let report = render_markdown(&record, &snapshot, None);

        assert!(report.starts_with("# Cricket Match Report"));
        assert!(report.contains("**Sunrisers vs Challengers**"));
        assert!(report.contains("## Team Comparison"));
        assert!(report.contains("| Sunrisers | 6 |"));
        assert!(report.contains("## Batting Performance"));
        assert!(report.contains("| Warner | 4 | 2 | 1 | 0 | 200.00 |"));
        assert!(report.contains("## Bowling Performance"));
        assert!(report.contains("## Extras"));
        assert!(report.contains("- wides: 1 deliveries"));
        assert!(!report.contains("## Expert Analysis"));
    }

    #[test]
    fn narrative_section_appears_when_supplied() {
        let record = sample_record();
        let snapshot = aggregate(&record).unwrap();
        let report =
            render_markdown(&record, &snapshot, Some("A dominant powerplay set the tone."));

        assert!(report.contains("## Expert Analysis"));
        assert!(report.contains("A dominant powerplay set the tone."));
        // Analysis comes before the tables, as in the original layout.
        let analysis = report.find("## Expert Analysis").unwrap();
        let comparison = report.find("## Team Comparison").unwrap();
        assert!(analysis < comparison);
    }
}
