//! Unit updates and the commit seam

pub mod sink;
pub mod update;

pub use sink::{CommitSink, Journal, JournalEntry, NullSink};
pub use update::UnitUpdate;
