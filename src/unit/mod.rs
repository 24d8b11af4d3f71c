//! Combat units and the pools they own
//!
//! Which pools a unit carries is decided once, at construction, from its
//! kind's capabilities. A pool the kind has no use for is `None`.

pub mod kind;
pub mod loadout;
pub mod status;

pub use kind::{Capabilities, UnitKind};
pub use loadout::{Item, ItemUpdate, Loadout, Refresh};
pub use status::{Resistances, Status, StatusSet};

use serde::{Deserialize, Serialize};

use crate::core::UnitId;
use crate::damage::DamageType;
use crate::pools::{deserialize_hit_points, BoundedResource};

/// Base numbers a unit is built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: f64,
    pub armor: f64,
    pub heat_capacity: f64,
    pub stress: f64,
    pub structure: f64,
    pub repairs: f64,
}

impl StatBlock {
    /// Licensed pilot out of the cockpit
    pub fn pilot() -> Self {
        Self {
            hp: 6.0,
            armor: 0.0,
            heat_capacity: 0.0,
            stress: 0.0,
            structure: 0.0,
            repairs: 0.0,
        }
    }

    /// Standard frame mech
    pub fn mech() -> Self {
        Self {
            hp: 10.0,
            armor: 1.0,
            heat_capacity: 6.0,
            stress: 4.0,
            structure: 4.0,
            repairs: 5.0,
        }
    }

    /// Tier 1 NPC grunt with a single structure and stress
    pub fn npc() -> Self {
        Self {
            hp: 10.0,
            armor: 0.0,
            heat_capacity: 8.0,
            stress: 1.0,
            structure: 1.0,
            repairs: 0.0,
        }
    }

    /// Drone or other deployed object
    pub fn deployable() -> Self {
        Self {
            hp: 5.0,
            armor: 0.0,
            heat_capacity: 5.0,
            stress: 0.0,
            structure: 0.0,
            repairs: 0.0,
        }
    }

    /// The preset for a kind
    pub fn for_kind(kind: UnitKind) -> Self {
        match kind {
            UnitKind::Pilot => Self::pilot(),
            UnitKind::Mech => Self::mech(),
            UnitKind::Npc => Self::npc(),
            UnitKind::Deployable => Self::deployable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(default)]
    pub id: UnitId,
    pub name: String,
    pub kind: UnitKind,
    #[serde(deserialize_with = "deserialize_hit_points")]
    pub hp: BoundedResource,
    /// Temporary buffer spent before hit points
    pub overshield: BoundedResource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat: Option<BoundedResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress: Option<BoundedResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<BoundedResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repairs: Option<BoundedResource>,
    /// Cumulative burn; not bounded
    #[serde(default)]
    pub burn: f64,
    #[serde(default)]
    pub armor: f64,
    #[serde(default)]
    pub resistances: Resistances,
    #[serde(default)]
    pub statuses: StatusSet,
    #[serde(default)]
    pub loadout: Loadout,
    /// Index into the overcharge sequence
    #[serde(default)]
    pub overcharge: usize,
}

impl Unit {
    pub fn new(name: impl Into<String>, kind: UnitKind, stats: StatBlock) -> Self {
        let caps = kind.capabilities();
        Self {
            id: UnitId::new(),
            name: name.into(),
            kind,
            hp: BoundedResource::hit_points(stats.hp, stats.hp),
            overshield: BoundedResource::empty(stats.hp),
            heat: caps
                .heat_pool
                .then(|| BoundedResource::empty(stats.heat_capacity)),
            stress: caps.risk_pools.then(|| BoundedResource::full(stats.stress)),
            structure: caps
                .risk_pools
                .then(|| BoundedResource::full(stats.structure)),
            repairs: caps.repairs.then(|| BoundedResource::full(stats.repairs)),
            burn: 0.0,
            armor: stats.armor,
            resistances: Resistances::none(),
            statuses: StatusSet::new(),
            loadout: Loadout::default(),
            overcharge: 0,
        }
    }

    /// Unit built from its kind's preset
    pub fn of_kind(name: impl Into<String>, kind: UnitKind) -> Self {
        Self::new(name, kind, StatBlock::for_kind(kind))
    }

    pub fn mech(name: impl Into<String>) -> Self {
        Self::of_kind(name, UnitKind::Mech)
    }

    pub fn npc(name: impl Into<String>) -> Self {
        Self::of_kind(name, UnitKind::Npc)
    }

    pub fn pilot(name: impl Into<String>) -> Self {
        Self::of_kind(name, UnitKind::Pilot)
    }

    pub fn deployable(name: impl Into<String>) -> Self {
        Self::of_kind(name, UnitKind::Deployable)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    pub fn has_status(&self, status: Status) -> bool {
        self.statuses.contains(status)
    }

    pub fn with_armor(mut self, armor: f64) -> Self {
        self.armor = armor;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.statuses.insert(status);
        self
    }

    pub fn with_resistance(mut self, damage_type: DamageType) -> Self {
        self.resistances.insert(damage_type);
        self
    }

    /// Grants a buffer, raising its cap if needed
    pub fn with_overshield(mut self, amount: f64) -> Self {
        let max = self.overshield.max.max(amount);
        self.overshield = BoundedResource::new(amount, max);
        self
    }

    /// Sets current heat without clamping; ignored on units with no heat pool
    pub fn with_heat(mut self, value: f64) -> Self {
        if let Some(heat) = self.heat.as_mut() {
            heat.overflow_set(value);
        }
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.loadout = Loadout::new(items);
        self
    }

    /// Change max HP, carrying current HP along with it
    ///
    /// A unit that is down (HP at or below 0) keeps its HP, as does any
    /// change involving a non-positive max. Otherwise current HP moves by
    /// the same amount as max, never dropping below 1.
    pub fn set_max_hp(&mut self, new_max: f64) {
        let old_max = self.hp.max;
        let current = self.hp.value;
        self.hp.max = new_max;

        if current <= 0.0 || old_max <= 0.0 || new_max <= 0.0 {
            return;
        }
        self.hp.set((current - old_max + new_max).max(1.0));
    }
}
