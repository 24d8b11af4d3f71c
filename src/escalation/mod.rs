//! Escalating risk tables
//!
//! A unit that overheats spends stress; a unit that runs out of hit points
//! spends structure. Each spend is followed by a roll on the matching table,
//! and the worse the pool, the more dice are rolled and the lower the
//! result is likely to be.
//!
//! Pool state per table: `Full -> max-1 -> ... -> 0 -> Depleted`, one step
//! per consume. Rolling on a depleted pool always gives entry 0.

pub mod automation;
pub mod outcome;
pub mod roll;
pub mod table;

pub use automation::pending_escalations;
pub use outcome::{EscalationOutcome, Presentation, MULTIPLE_ONES_LABEL};
pub use roll::{
    consume, roll_destruction, roll_table, DestructionRoll, DestructionTarget, MAX_TABLE_DICE,
};
pub use table::{OverheatTable, RiskPool, RiskTable, StructureTable};
