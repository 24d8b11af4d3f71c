//! Consume and roll steps
//!
//! Consuming spends one tier of a pool. Rolling reads a table at a given
//! number of remaining tiers and never touches the unit, which is what makes
//! rerolls safe.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::outcome::{EscalationOutcome, MULTIPLE_ONES_LABEL};
use super::table::RiskTable;
use crate::actions::ActionDescriptor;
use crate::commit::UnitUpdate;
use crate::core::UnitId;
use crate::dice::{DiceExpr, DiceRoll, DiceRoller};
use crate::unit::Unit;

/// Most dice a single table roll will throw, however deep the pool
pub const MAX_TABLE_DICE: u32 = 16;

/// Spend one tier of the table's pool if its trigger holds
pub fn consume(table: &dyn RiskTable, unit: &mut Unit) -> Option<UnitUpdate> {
    let update = table.consume_update(unit)?;
    update.apply(unit);
    Some(update)
}

/// Roll `max - remaining` d6 (at most [`MAX_TABLE_DICE`]), keep the
/// lowest, and look it up
///
/// Returns `None` when the pool is full (nothing to roll) or when the dice
/// could not produce a total.
pub fn roll_table(
    table: &dyn RiskTable,
    unit: UnitId,
    remaining: u32,
    max: u32,
    dice: &mut dyn DiceRoller,
) -> Option<EscalationOutcome> {
    let pool = table.pool();
    if remaining >= max {
        info!(%unit, %pool, remaining, max, "Unit is at full {}, no check to roll", pool);
        return None;
    }

    let reroll_action = Some(ActionDescriptor::reroll(pool, unit, remaining));

    if remaining == 0 {
        return Some(EscalationOutcome {
            pool,
            index: 0,
            title: table.title(0).to_string(),
            narrative: table.narrative(0, 0, max).to_string(),
            total_label: String::new(),
            remaining,
            max,
            roll: None,
            secondary_action: table.secondary_action(0, 0, unit),
            reroll_action,
            terminal: true,
        });
    }

    let spent = max - remaining;
    if spent > MAX_TABLE_DICE {
        debug!(%unit, %pool, spent, "Capping table roll at {} dice", MAX_TABLE_DICE);
    }
    let roll = dice.roll(&DiceExpr::keep_lowest(spent.min(MAX_TABLE_DICE), 6));
    let Some(total) = roll.total else {
        debug!(%unit, %pool, results = ?roll.results, "Roll produced no total, aborting");
        return None;
    };

    let (index, total_label) = if roll.count_of(1) >= 2 {
        (0, MULTIPLE_ONES_LABEL.to_string())
    } else {
        let Some(index) = usize::try_from(total).ok().filter(|&i| i <= 6) else {
            debug!(%unit, %pool, total, "Roll total is off the table, aborting");
            return None;
        };
        (index, total.to_string())
    };

    Some(EscalationOutcome {
        pool,
        index,
        title: table.title(index).to_string(),
        narrative: table.narrative(index, remaining, max).to_string(),
        total_label,
        remaining,
        max,
        secondary_action: table.secondary_action(index, remaining, unit),
        roll: Some(roll),
        reroll_action,
        terminal: false,
    })
}

/// What System Trauma takes off the mech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestructionTarget {
    /// 1-3
    WeaponMount,
    /// 4-6
    System,
}

impl DestructionTarget {
    pub fn from_face(face: i64) -> Option<Self> {
        match face {
            1..=3 => Some(DestructionTarget::WeaponMount),
            4..=6 => Some(DestructionTarget::System),
            _ => None,
        }
    }

    pub fn narrative(self) -> &'static str {
        match self {
            DestructionTarget::WeaponMount => {
                "All weapons on one mount of your choice are destroyed."
            }
            DestructionTarget::System => "A system of your choice is destroyed.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestructionRoll {
    pub roll: DiceRoll,
    pub target: DestructionTarget,
}

/// The 1d6 follow-up to System Trauma
pub fn roll_destruction(dice: &mut dyn DiceRoller) -> Option<DestructionRoll> {
    let roll = dice.roll(&DiceExpr::new(1, 6));
    let target = DestructionTarget::from_face(roll.total?)?;
    Some(DestructionRoll { roll, target })
}
