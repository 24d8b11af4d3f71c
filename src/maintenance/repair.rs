//! Full repair between missions

use crate::commit::UnitUpdate;
use crate::unit::{Refresh, Unit};

/// Everything a full repair restores, as one update
pub fn plan_full_repair(unit: &Unit) -> UnitUpdate {
    let caps = unit.capabilities();

    let mut update = UnitUpdate {
        hp: Some(unit.hp.max),
        burn: Some(0.0),
        overshield: Some(0.0),
        clear_all_statuses: true,
        ..UnitUpdate::default()
    };

    if let Some(heat) = unit.heat {
        update.heat = Some(heat.min);
    }
    update.stress = unit.stress.map(|stress| stress.max);
    update.structure = unit.structure.map(|structure| structure.max);
    update.repairs = unit.repairs.map(|repairs| repairs.max);

    if caps.overcharge {
        update.overcharge = Some(0);
    }
    if caps.loadout {
        update.items = unit.loadout.refresh_all(Refresh::ALL);
    }
    update
}

/// Restore a unit to fighting shape, returning what was written
pub fn full_repair(unit: &mut Unit) -> UnitUpdate {
    let update = plan_full_repair(unit);
    update.apply(unit);
    update
}
