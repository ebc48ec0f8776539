//! Statistics aggregation engine.
//!
//! A single forward pass over an ordered delivery stream, folded into
//! per-player batting/bowling aggregates, extras tallies, and team
//! totals, followed by derived-rate finalization (strike rate, economy).

mod aggregator;
mod snapshot;

pub use aggregator::aggregate;
pub use snapshot::{BattingAggregate, BowlingAggregate, ExtrasAggregate, StatsSnapshot};
