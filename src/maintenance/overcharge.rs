//! Overcharge: voluntary heat for an extra action
//!
//! Each use costs the current step of the sequence and moves to the next
//! step, stopping at the last one until a full repair resets it.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::commit::UnitUpdate;
use crate::core::config::MIN_OVERCHARGE_STEPS;
use crate::core::{AttritionError, OverchargeConfig, Result};
use crate::dice::{DiceExpr, DiceRoll, DiceRoller};
use crate::unit::Unit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverchargeResult {
    pub roll: DiceRoll,
    pub heat_gained: f64,
    /// Level after this overcharge
    pub level: usize,
    pub update: UnitUpdate,
}

/// The heat cost of the unit's next overcharge
///
/// `None` for units that can't overcharge or when the sequence is too short.
pub fn overcharge_roll<'a>(unit: &Unit, config: &'a OverchargeConfig) -> Option<&'a str> {
    if !unit.capabilities().overcharge || config.sequence.len() < MIN_OVERCHARGE_STEPS {
        return None;
    }
    let level = unit.overcharge.min(config.sequence.len() - 1);
    config.sequence.get(level).map(String::as_str)
}

pub fn plan_overcharge(
    unit: &Unit,
    config: &OverchargeConfig,
    dice: &mut dyn DiceRoller,
) -> Result<Option<OverchargeResult>> {
    if !unit.capabilities().overcharge {
        return Err(AttritionError::Unsupported {
            unit: unit.name.clone(),
            kind: unit.kind,
            operation: "overcharge",
        });
    }
    let heat = unit.heat.ok_or_else(|| AttritionError::MissingPool {
        unit: unit.name.clone(),
        pool: "heat",
    })?;

    let Some(step) = overcharge_roll(unit, config) else {
        info!(unit = %unit.name, steps = config.sequence.len(), "Overcharge sequence too short, nothing to roll");
        return Ok(None);
    };
    let expr: DiceExpr = step.parse()?;

    let roll = dice.roll(&expr);
    let Some(total) = roll.total else {
        return Ok(None);
    };

    let heat_gained = total.max(0) as f64;
    let level = (unit.overcharge + 1).min(config.sequence.len() - 1);
    let update = UnitUpdate {
        heat: Some(heat.value + heat_gained),
        overcharge: Some(level),
        ..UnitUpdate::default()
    };

    Ok(Some(OverchargeResult {
        roll,
        heat_gained,
        level,
        update,
    }))
}

/// Roll the current step, take the heat and advance the level
pub fn overcharge(
    unit: &mut Unit,
    config: &OverchargeConfig,
    dice: &mut dyn DiceRoller,
) -> Result<Option<OverchargeResult>> {
    let result = plan_overcharge(unit, config, dice)?;
    if let Some(result) = &result {
        result.update.apply(unit);
    }
    Ok(result)
}
