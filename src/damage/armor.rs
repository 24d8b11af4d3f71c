//! Armor and resistance reduction

use serde::{Deserialize, Serialize};

use super::types::{DamageBundle, DamageType};
use crate::unit::Resistances;

/// Which armored types armor is spent on first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorPolicy {
    /// Unresisted types first, so halving bites on as much as possible
    #[default]
    DefenderFavored,
    /// Resisted types first
    AttackerFavored,
}

/// Reduce a bundle by armor, then halve resisted types
///
/// Armor is spent type by type in `DamageType::ARMORED` order, within each
/// group the policy puts first. Burn and heat ignore armor but are still
/// halved when resisted.
pub fn apply_armor(
    damage: &mut DamageBundle,
    armor: f64,
    resistances: &Resistances,
    policy: ArmorPolicy,
) {
    let (resisted, unresisted): (Vec<DamageType>, Vec<DamageType>) = DamageType::ARMORED
        .iter()
        .partition(|&&t| resistances.contains(t));

    let (first, second) = match policy {
        ArmorPolicy::DefenderFavored => (&unresisted, &resisted),
        ArmorPolicy::AttackerFavored => (&resisted, &unresisted),
    };

    let mut remaining = armor.max(0.0);
    for &damage_type in first.iter().chain(second.iter()) {
        let absorbed = remaining.min(damage[damage_type]);
        damage[damage_type] -= absorbed;
        remaining -= absorbed;
    }

    for &damage_type in &resisted {
        damage[damage_type] /= 2.0;
    }
    for damage_type in [DamageType::Burn, DamageType::Heat] {
        if resistances.contains(damage_type) {
            damage[damage_type] /= 2.0;
        }
    }
}
