//! Stabilize: the full action that rolls a unit's risk back
//!
//! The unit picks one primary (cool down or spend a repair) and one
//! secondary. All writes land in a single update, applied after both
//! choices have been worked out.

pub mod choice;

pub use choice::{PrimaryChoice, SecondaryChoice};

use crate::commit::UnitUpdate;
use crate::core::{AttritionError, Result};
use crate::unit::{Refresh, Status, Unit};

#[derive(Debug, Clone, PartialEq)]
pub struct StabilizeResult {
    /// Text for the log or chat card
    pub summary: String,
    pub update: UnitUpdate,
}

/// Fails for units that can't stabilize
pub fn check_stabilize(unit: &Unit) -> Result<()> {
    if unit.capabilities().stabilize {
        Ok(())
    } else {
        Err(AttritionError::Unsupported {
            unit: unit.name.clone(),
            kind: unit.kind,
            operation: "stabilize",
        })
    }
}

/// Work out what stabilizing would do, without touching the unit
pub fn plan_stabilize(
    unit: &Unit,
    primary: PrimaryChoice,
    secondary: SecondaryChoice,
) -> Result<StabilizeResult> {
    check_stabilize(unit)?;

    let mut update = UnitUpdate::new();
    let mut lines = Vec::new();

    match primary {
        PrimaryChoice::Cool => {
            if unit.heat.is_some() {
                update.heat = Some(0.0);
            }
            update.cleared_statuses.push(Status::Exposed);
            lines.push(format!("{} is cooling itself. EXPOSED cleared.", unit.name));
        }
        PrimaryChoice::Repair => {
            let repairs = unit.repairs.ok_or_else(|| AttritionError::MissingPool {
                unit: unit.name.clone(),
                pool: "repairs",
            })?;
            if repairs.value <= 0.0 {
                return Ok(StabilizeResult {
                    summary: format!(
                        "{} has decided to repair, but doesn't have any repair left. Please try again.",
                        unit.name
                    ),
                    update: UnitUpdate::new(),
                });
            }
            update.repairs = Some(repairs.value - 1.0);
            lines.push(format!("{} spends a repair.", unit.name));
        }
    }

    match secondary {
        SecondaryChoice::ClearBurn => {
            update.burn = Some(0.0);
            lines.push(format!("{} has selected full burn clear.", unit.name));
        }
        SecondaryChoice::ClearOwnCondition => {
            lines.push(format!(
                "{} has selected to clear own condition. Please clear manually.",
                unit.name
            ));
        }
        SecondaryChoice::ClearAlliedCondition => {
            lines.push(format!(
                "{} has selected to clear an allied condition. Please clear manually.",
                unit.name
            ));
        }
        SecondaryChoice::Reload => {
            update.items = unit.loadout.refresh_all(Refresh::RELOAD);
            lines.push(format!("{} has selected full reload, reloading...", unit.name));
        }
    }

    Ok(StabilizeResult {
        summary: lines.join("\n"),
        update,
    })
}

/// Stabilize a unit and return the summary
pub fn stabilize(unit: &mut Unit, primary: PrimaryChoice, secondary: SecondaryChoice) -> Result<String> {
    let result = plan_stabilize(unit, primary, secondary)?;
    result.update.apply(unit);
    Ok(result.summary)
}

/// Stabilize from free-text choices
///
/// A choice that isn't recognized does nothing and returns empty text.
pub fn stabilize_named(unit: &mut Unit, primary: &str, secondary: &str) -> Result<String> {
    check_stabilize(unit)?;
    match (
        primary.parse::<PrimaryChoice>(),
        secondary.parse::<SecondaryChoice>(),
    ) {
        (Ok(primary), Ok(secondary)) => stabilize(unit, primary, secondary),
        _ => Ok(String::new()),
    }
}
