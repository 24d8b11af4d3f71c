//! Unit kinds and the capabilities they imply
//!
//! The engine never branches on a concrete kind. It asks for the kind's
//! `Capabilities` and checks those.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Pilot,
    Mech,
    Npc,
    Deployable,
}

/// What a unit kind can carry and do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Carries a heat pool; heat damage lands here instead of as energy
    pub heat_pool: bool,
    /// Carries stress and structure pools and rolls the risk tables
    pub risk_pools: bool,
    /// Carries a repair budget
    pub repairs: bool,
    /// Owns loadout items that can be reloaded and repaired
    pub loadout: bool,
    /// May take the stabilize action
    pub stabilize: bool,
    /// May overcharge
    pub overcharge: bool,
}

impl UnitKind {
    pub fn all() -> &'static [UnitKind] {
        &[
            UnitKind::Pilot,
            UnitKind::Mech,
            UnitKind::Npc,
            UnitKind::Deployable,
        ]
    }

    pub const fn capabilities(self) -> Capabilities {
        match self {
            UnitKind::Pilot => Capabilities {
                heat_pool: false,
                risk_pools: false,
                repairs: false,
                loadout: true,
                stabilize: false,
                overcharge: false,
            },
            UnitKind::Mech => Capabilities {
                heat_pool: true,
                risk_pools: true,
                repairs: true,
                loadout: true,
                stabilize: true,
                overcharge: true,
            },
            UnitKind::Npc => Capabilities {
                heat_pool: true,
                risk_pools: true,
                repairs: false,
                loadout: true,
                stabilize: true,
                overcharge: false,
            },
            UnitKind::Deployable => Capabilities {
                heat_pool: true,
                risk_pools: false,
                repairs: false,
                loadout: false,
                stabilize: false,
                overcharge: false,
            },
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitKind::Pilot => "pilot",
            UnitKind::Mech => "mech",
            UnitKind::Npc => "NPC",
            UnitKind::Deployable => "deployable",
        };
        f.write_str(name)
    }
}
