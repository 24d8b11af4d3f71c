//! Mech Attrition - combat degradation for mechs, NPCs, pilots and deployables
//!
//! Damage resolution against armor, resistances and overshield; the overheat
//! and structure risk tables; and the stabilize action that rolls risk back.

pub mod actions;
pub mod commit;
pub mod core;
pub mod damage;
pub mod dice;
pub mod engine;
pub mod escalation;
pub mod maintenance;
pub mod pools;
pub mod stabilize;
pub mod unit;

pub use crate::core::{AttritionError, EngineConfig, Result, UnitId};
pub use crate::engine::{AttritionEngine, DamageReport, Dispatched};
pub use crate::unit::{Unit, UnitKind};
