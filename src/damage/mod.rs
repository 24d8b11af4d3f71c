//! Damage resolution
//!
//! A hit is a `DamageBundle` of per-type magnitudes. Resolution runs it
//! through the unit's statuses, armor, resistances and overshield, and
//! produces the update to write back.

pub mod armor;
pub mod resolve;
pub mod types;

pub use armor::{apply_armor, ArmorPolicy};
pub use resolve::{plan, resolve, DamagePlan, HitFlags};
pub use types::{DamageBundle, DamageType};
