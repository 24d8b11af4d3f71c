//! Damage resolution pipeline
//!
//! 1. Heat becomes energy on units with no heat pool.
//! 2. EXPOSED doubles the armored types.
//! 3. Armor and resistances, unless the hit is paracausal or the target SHREDDED.
//! 4. Heat goes into the heat pool.
//! 5. Armored damage is rounded up; burn is added unrounded.
//! 6. Overshield soaks first, the rest comes off hit points.
//! 7. Burn accumulates.

use serde::{Deserialize, Serialize};

use super::armor::{apply_armor, ArmorPolicy};
use super::types::{DamageBundle, DamageType};
use crate::commit::UnitUpdate;
use crate::unit::{Status, Unit};

/// Per-hit modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitFlags {
    /// Ignore the target's armor for this hit
    pub armor_piercing: bool,
    /// Ignore armor and resistances entirely
    pub paracausal: bool,
}

/// What a hit will do, computed without touching the unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamagePlan {
    /// The bundle after every reduction step
    pub resolved: DamageBundle,
    /// Taken by the overshield
    pub absorbed: f64,
    /// Taken off hit points
    pub applied_to_hp: f64,
    pub heat_gained: f64,
    pub update: UnitUpdate,
}

pub fn plan(unit: &Unit, damage: DamageBundle, flags: HitFlags, policy: ArmorPolicy) -> DamagePlan {
    let mut damage = damage.sanitized();

    if unit.heat.is_none() {
        damage.energy += damage.heat;
        damage.heat = 0.0;
    }

    if unit.has_status(Status::Exposed) {
        for damage_type in DamageType::ARMORED {
            damage[damage_type] *= 2.0;
        }
    }

    if !flags.paracausal && !unit.has_status(Status::Shredded) {
        let armor = if flags.armor_piercing { 0.0 } else { unit.armor };
        apply_armor(&mut damage, armor, &unit.resistances, policy);
    }

    let mut update = UnitUpdate::new();

    let heat_gained = match unit.heat {
        Some(heat) if damage.heat > 0.0 => {
            update.heat = Some(heat.value + damage.heat);
            damage.heat
        }
        _ => 0.0,
    };

    let total = damage.armored_total().ceil() + damage.burn;
    let absorbed = unit.overshield.value.max(0.0).min(total);
    let applied_to_hp = total - absorbed;

    if absorbed > 0.0 {
        update.overshield = Some(unit.overshield.value - absorbed);
    }
    if applied_to_hp > 0.0 {
        update.hp = Some(unit.hp.value - applied_to_hp);
    }
    if damage.burn > 0.0 {
        update.burn = Some(unit.burn + damage.burn);
    }

    DamagePlan {
        resolved: damage,
        absorbed,
        applied_to_hp,
        heat_gained,
        update,
    }
}

/// Apply a hit to a unit, returning the damage that reached hit points
pub fn resolve(unit: &mut Unit, damage: DamageBundle, flags: HitFlags, policy: ArmorPolicy) -> f64 {
    let plan = plan(unit, damage, flags, policy);
    plan.update.apply(unit);
    plan.applied_to_hp
}
