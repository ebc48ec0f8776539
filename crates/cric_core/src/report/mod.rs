//! Report surfaces built on a statistics snapshot: the serialized digest
//! handed to the narrative backend, and the markdown match report.

mod digest;
mod markdown;

pub use digest::{BattingLeader, BowlingLeader, MatchDigest};
pub use markdown::render_markdown;
