//! Overheat and structure tables
//!
//! Both tables share a shape: seven entries indexed 0 to 6, worst first,
//! with 2-4 and 5-6 sharing an entry. Index 1 branches on how much of the
//! pool is left.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::actions::{ActionDescriptor, Stat};
use crate::commit::UnitUpdate;
use crate::core::UnitId;
use crate::pools::BoundedResource;
use crate::unit::Unit;

/// The two pools that escalate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPool {
    /// Spent by overheating
    Stress,
    /// Spent by running out of hit points
    Structure,
}

impl RiskPool {
    pub fn all() -> &'static [RiskPool] {
        &[RiskPool::Stress, RiskPool::Structure]
    }

    /// The unit's pool, if it carries one
    pub fn of(self, unit: &Unit) -> Option<&BoundedResource> {
        match self {
            RiskPool::Stress => unit.stress.as_ref(),
            RiskPool::Structure => unit.structure.as_ref(),
        }
    }

    pub fn table(self) -> &'static dyn RiskTable {
        match self {
            RiskPool::Stress => &OverheatTable,
            RiskPool::Structure => &StructureTable,
        }
    }
}

impl fmt::Display for RiskPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskPool::Stress => f.write_str("stress"),
            RiskPool::Structure => f.write_str("structure"),
        }
    }
}

pub trait RiskTable {
    fn pool(&self) -> RiskPool;

    /// Whether the pool this table guards against has overflowed
    /// (heat over capacity, hit points gone)
    fn overflowing(&self, unit: &Unit) -> bool;

    /// Writes for spending one tier of the pool
    ///
    /// Only called once `triggered` holds.
    fn spend(&self, unit: &Unit, risk: BoundedResource) -> UnitUpdate;

    fn title(&self, index: usize) -> &'static str;

    fn narrative(&self, index: usize, remaining: u32, max: u32) -> &'static str;

    /// Extra follow-up offered by an entry, besides the reroll
    fn secondary_action(&self, index: usize, remaining: u32, unit: UnitId) -> Option<ActionDescriptor>;

    /// Overflowed with something left in the pool to spend
    fn triggered(&self, unit: &Unit) -> bool {
        let has_tiers = self.pool().of(unit).is_some_and(|risk| risk.value > 0.0);
        has_tiers && self.overflowing(unit)
    }

    /// The update the consume step would write, or `None` if not triggered
    fn consume_update(&self, unit: &Unit) -> Option<UnitUpdate> {
        if !self.triggered(unit) {
            return None;
        }
        let risk = *self.pool().of(unit)?;
        Some(self.spend(unit, risk))
    }
}

/// Overheating: spends stress when heat passes capacity
#[derive(Debug, Clone, Copy, Default)]
pub struct OverheatTable;

const OVERHEAT_TITLES: [&str; 7] = [
    "Irreversible Meltdown",
    "Meltdown",
    "Destabilized Power Plant",
    "Destabilized Power Plant",
    "Destabilized Power Plant",
    "Emergency Shunt",
    "Emergency Shunt",
];

const MECH_EXPOSED: &str = "Your mech becomes EXPOSED.";

impl RiskTable for OverheatTable {
    fn pool(&self) -> RiskPool {
        RiskPool::Stress
    }

    fn overflowing(&self, unit: &Unit) -> bool {
        unit.heat.is_some_and(|heat| heat.value > heat.max)
    }

    fn spend(&self, unit: &Unit, stress: BoundedResource) -> UnitUpdate {
        let mut update = UnitUpdate {
            stress: Some(stress.value - 1.0),
            ..UnitUpdate::default()
        };
        // The last point of stress keeps its heat
        if stress.value > 1.0 {
            if let Some(heat) = unit.heat {
                update.heat = Some(heat.value - heat.max);
            }
        }
        update
    }

    fn title(&self, index: usize) -> &'static str {
        OVERHEAT_TITLES[index.min(6)]
    }

    fn narrative(&self, index: usize, remaining: u32, max: u32) -> &'static str {
        match index {
            0 if max > 1 => {
                "The reactor goes critical. Your mech suffers a reactor meltdown at the end of your next turn."
            }
            0 => MECH_EXPOSED,
            1 => match remaining {
                2 => {
                    "Roll an ENGINEERING check. On a success, your mech is EXPOSED; on a failure, it suffers a \
                     reactor meltdown after 1d6 of your turns (rolled by the GM). A reactor meltdown can be \
                     prevented by retrying the ENGINEERING check as a full action."
                }
                1 => "Your mech suffers a reactor meltdown at the end of your next turn.",
                _ => MECH_EXPOSED,
            },
            2..=4 => {
                "The power plant becomes unstable, beginning to eject jets of plasma. Your mech becomes \
                 EXPOSED, taking double kinetic, explosive and energy damage until the status is cleared."
            }
            _ => {
                "Your mech's cooling systems manage to contain the increasing heat; however, your mech \
                 becomes IMPAIRED until the end of your next turn."
            }
        }
    }

    fn secondary_action(&self, index: usize, remaining: u32, unit: UnitId) -> Option<ActionDescriptor> {
        (index == 1 && remaining == 2).then(|| ActionDescriptor::stat_check(unit, Stat::Engineering))
    }
}

/// Structural failure: spends structure when hit points run out
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureTable;

const STRUCTURE_TITLES: [&str; 7] = [
    "Crushing Hit",
    "Direct Hit",
    "System Trauma",
    "System Trauma",
    "System Trauma",
    "Glancing Blow",
    "Glancing Blow",
];

impl RiskTable for StructureTable {
    fn pool(&self) -> RiskPool {
        RiskPool::Structure
    }

    fn overflowing(&self, unit: &Unit) -> bool {
        unit.hp.value < 1.0
    }

    fn spend(&self, unit: &Unit, structure: BoundedResource) -> UnitUpdate {
        UnitUpdate {
            structure: Some(structure.value - 1.0),
            hp: Some(unit.hp.value + unit.hp.max),
            ..UnitUpdate::default()
        }
    }

    fn title(&self, index: usize) -> &'static str {
        STRUCTURE_TITLES[index.min(6)]
    }

    fn narrative(&self, index: usize, remaining: u32, _max: u32) -> &'static str {
        match index {
            0 => "Your mech is damaged beyond repair and is destroyed. You may still exit it as normal.",
            1 => match remaining {
                2 => {
                    "Roll a HULL check. On a success, your mech is STUNNED until the end of your next turn. \
                     On a failure, your mech is destroyed."
                }
                1 => "Your mech is destroyed.",
                _ => "Your mech is STUNNED until the end of your next turn.",
            },
            2..=4 => {
                "Parts of your mech are torn off by the damage. Roll 1d6. On a 1-3, all weapons on one \
                 mount of your choice are destroyed; on a 4-6, a system of your choice is destroyed. \
                 LIMITED systems and weapons that are out of charges are not valid choices. If there are \
                 no valid choices remaining, it becomes the other result. If there are no valid systems \
                 or weapons remaining, this result becomes a DIRECT HIT instead."
            }
            _ => {
                "Emergency systems kick in and stabilize your mech, but it's IMPAIRED until the end of \
                 your next turn."
            }
        }
    }

    fn secondary_action(&self, index: usize, remaining: u32, unit: UnitId) -> Option<ActionDescriptor> {
        match index {
            1 if remaining == 2 => Some(ActionDescriptor::stat_check(unit, Stat::Hull)),
            2..=4 => Some(ActionDescriptor::roll_for_destruction(unit)),
            _ => None,
        }
    }
}
