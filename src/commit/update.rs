//! Partial unit updates
//!
//! Every mutating operation gathers its writes into one `UnitUpdate` and
//! applies it in a single step once its branch logic has finished.

use serde::{Deserialize, Serialize};

use crate::unit::{ItemUpdate, Status, Unit};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overshield: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repairs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burn: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overcharge: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cleared_statuses: Vec<Status>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub clear_all_statuses: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemUpdate>,
}

impl UnitUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hp.is_none()
            && self.overshield.is_none()
            && self.heat.is_none()
            && self.stress.is_none()
            && self.structure.is_none()
            && self.repairs.is_none()
            && self.burn.is_none()
            && self.overcharge.is_none()
            && self.cleared_statuses.is_empty()
            && !self.clear_all_statuses
            && self.items.is_empty()
    }

    /// Write every field that is set
    ///
    /// Heat and hit points are written as-is. The other pools clamp. Fields
    /// for pools the unit doesn't carry are skipped.
    pub fn apply(&self, unit: &mut Unit) {
        if let Some(hp) = self.hp {
            unit.hp.overflow_set(hp);
        }
        if let Some(overshield) = self.overshield {
            unit.overshield.set(overshield);
        }
        if let (Some(value), Some(heat)) = (self.heat, unit.heat.as_mut()) {
            heat.overflow_set(value);
        }
        if let (Some(value), Some(stress)) = (self.stress, unit.stress.as_mut()) {
            stress.set(value);
        }
        if let (Some(value), Some(structure)) = (self.structure, unit.structure.as_mut()) {
            structure.set(value);
        }
        if let (Some(value), Some(repairs)) = (self.repairs, unit.repairs.as_mut()) {
            repairs.set(value);
        }
        if let Some(burn) = self.burn {
            unit.burn = burn;
        }
        if let Some(level) = self.overcharge {
            unit.overcharge = level;
        }
        if self.clear_all_statuses {
            unit.statuses.clear();
        }
        for status in &self.cleared_statuses {
            unit.statuses.remove(*status);
        }
        unit.loadout.apply(&self.items);
    }
}
