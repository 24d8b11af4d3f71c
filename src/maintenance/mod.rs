//! Out-of-combat upkeep and overcharge

pub mod overcharge;
pub mod repair;

pub use overcharge::{overcharge, overcharge_roll, plan_overcharge, OverchargeResult};
pub use repair::{full_repair, plan_full_repair};
