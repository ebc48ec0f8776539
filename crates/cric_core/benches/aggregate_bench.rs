use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cric_core::{
    aggregate, Delivery, ExtraKind, Innings, MatchInfo, MatchRecord, RunsBreakdown, WicketEvent,
};

/// A full T20 worth of deliveries (two innings of 20 overs).
fn t20_record() -> MatchRecord {
    let innings = |label: &str, team: &str, batter_prefix: &str, bowler_prefix: &str| {
        let deliveries = (0..240)
            .map(|i| {
                let runs = (i % 7) as u32; // 0..=6 spread
                let mut extras = BTreeMap::new();
                if i % 17 == 0 {
                    extras.insert(ExtraKind::Wides, 1);
                }
                Delivery {
                    ball: format!("{}.{}", i / 6, i % 6 + 1),
                    batsman: format!("{batter_prefix}{}", i % 8),
                    bowler: format!("{bowler_prefix}{}", (i / 6) % 5),
                    non_striker: None,
                    runs: RunsBreakdown { batsman: runs, extras: 0, total: runs },
                    wicket: (i % 40 == 39).then(WicketEvent::default),
                    extras,
                }
            })
            .collect();
        Innings {
            label: label.to_string(),
            batting_team: team.to_string(),
            deliveries,
        }
    };

    MatchRecord {
        info: MatchInfo::default(),
        innings: vec![
            innings("1st innings", "Sunrisers", "P", "B"),
            innings("2nd innings", "Challengers", "Q", "C"),
        ],
    }
}

fn bench_aggregate(c: &mut Criterion) {
    let record = t20_record();
    c.bench_function("aggregate_t20", |b| {
        b.iter(|| aggregate(black_box(&record)).unwrap())
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
