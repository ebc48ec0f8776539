pub mod match_record;

pub use match_record::{
    Delivery, ExtraKind, Innings, MatchInfo, MatchRecord, Outcome, RunsBreakdown, WicketEvent,
    WinMargin,
};
