//! Damage types and per-type bundles

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Kinetic,
    Energy,
    Explosive,
    Variable,
    Burn,
    Heat,
}

impl DamageType {
    /// Types that armor reduces, in the order armor is spent on them
    pub const ARMORED: [DamageType; 4] = [
        DamageType::Kinetic,
        DamageType::Energy,
        DamageType::Explosive,
        DamageType::Variable,
    ];

    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Kinetic,
            DamageType::Energy,
            DamageType::Explosive,
            DamageType::Variable,
            DamageType::Burn,
            DamageType::Heat,
        ]
    }

    pub fn is_armored(self) -> bool {
        Self::ARMORED.contains(&self)
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DamageType::Kinetic => "Kinetic",
            DamageType::Energy => "Energy",
            DamageType::Explosive => "Explosive",
            DamageType::Variable => "Variable",
            DamageType::Burn => "Burn",
            DamageType::Heat => "Heat",
        };
        f.write_str(name)
    }
}

/// Magnitude of each damage type in one hit
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageBundle {
    pub kinetic: f64,
    pub energy: f64,
    pub explosive: f64,
    pub variable: f64,
    pub burn: f64,
    pub heat: f64,
}

impl DamageBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same bundle with `amount` of `damage_type`; negative amounts become 0
    pub fn with(mut self, damage_type: DamageType, amount: f64) -> Self {
        self[damage_type] = amount.max(0.0);
        self
    }

    /// Build from `(type, amount)` pairs, summing repeats
    pub fn from_pairs(pairs: impl IntoIterator<Item = (DamageType, f64)>) -> Self {
        let mut bundle = Self::new();
        for (damage_type, amount) in pairs {
            bundle[damage_type] += amount.max(0.0);
        }
        bundle
    }

    /// Floor every magnitude at 0
    pub fn sanitized(mut self) -> Self {
        for &damage_type in DamageType::all() {
            self[damage_type] = self[damage_type].max(0.0);
        }
        self
    }

    /// Kinetic + energy + explosive + variable, unrounded
    pub fn armored_total(&self) -> f64 {
        DamageType::ARMORED.iter().map(|&t| self[t]).sum()
    }

    pub fn is_empty(&self) -> bool {
        DamageType::all().iter().all(|&t| self[t] == 0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        DamageType::all().iter().map(move |&t| (t, self[t]))
    }
}

impl Index<DamageType> for DamageBundle {
    type Output = f64;

    fn index(&self, damage_type: DamageType) -> &f64 {
        match damage_type {
            DamageType::Kinetic => &self.kinetic,
            DamageType::Energy => &self.energy,
            DamageType::Explosive => &self.explosive,
            DamageType::Variable => &self.variable,
            DamageType::Burn => &self.burn,
            DamageType::Heat => &self.heat,
        }
    }
}

impl IndexMut<DamageType> for DamageBundle {
    fn index_mut(&mut self, damage_type: DamageType) -> &mut f64 {
        match damage_type {
            DamageType::Kinetic => &mut self.kinetic,
            DamageType::Energy => &mut self.energy,
            DamageType::Explosive => &mut self.explosive,
            DamageType::Variable => &mut self.variable,
            DamageType::Burn => &mut self.burn,
            DamageType::Heat => &mut self.heat,
        }
    }
}
