//! Status conditions and damage resistances

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::damage::DamageType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    DangerZone,
    DownAndOut,
    Engaged,
    /// Doubles kinetic, energy, explosive and variable damage taken
    Exposed,
    Hidden,
    Immobilized,
    Impaired,
    Invisible,
    Jammed,
    LockOn,
    Prone,
    /// Armor and resistances are ignored
    Shredded,
    Shutdown,
    Slowed,
    Stunned,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::DangerZone => "DANGER ZONE",
            Status::DownAndOut => "DOWN AND OUT",
            Status::Engaged => "ENGAGED",
            Status::Exposed => "EXPOSED",
            Status::Hidden => "HIDDEN",
            Status::Immobilized => "IMMOBILIZED",
            Status::Impaired => "IMPAIRED",
            Status::Invisible => "INVISIBLE",
            Status::Jammed => "JAMMED",
            Status::LockOn => "LOCK ON",
            Status::Prone => "PRONE",
            Status::Shredded => "SHREDDED",
            Status::Shutdown => "SHUT DOWN",
            Status::Slowed => "SLOWED",
            Status::Stunned => "STUNNED",
        };
        f.write_str(name)
    }
}

/// Active statuses on a unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusSet(AHashSet<Status>);

impl StatusSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, status: Status) -> bool {
        self.0.contains(&status)
    }

    /// Returns true if the status was newly applied
    pub fn insert(&mut self, status: Status) -> bool {
        self.0.insert(status)
    }

    /// Returns true if the status was present
    pub fn remove(&mut self, status: Status) -> bool {
        self.0.remove(&status)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Status> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Status> for StatusSet {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Damage types a unit takes half damage from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resistances(AHashSet<DamageType>);

impl Resistances {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, damage_type: DamageType) -> bool {
        self.0.contains(&damage_type)
    }

    pub fn insert(&mut self, damage_type: DamageType) -> bool {
        self.0.insert(damage_type)
    }

    pub fn remove(&mut self, damage_type: DamageType) -> bool {
        self.0.remove(&damage_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<DamageType> for Resistances {
    fn from_iter<I: IntoIterator<Item = DamageType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_insert_and_remove() {
        let mut statuses = StatusSet::new();
        assert!(statuses.insert(Status::Exposed));
        assert!(!statuses.insert(Status::Exposed));
        assert!(statuses.contains(Status::Exposed));
        assert!(statuses.remove(Status::Exposed));
        assert!(statuses.is_empty());
    }

    #[test]
    fn test_status_set_serializes_as_list() {
        let statuses: StatusSet = [Status::Shredded].into_iter().collect();
        let json = serde_json::to_string(&statuses).unwrap();
        assert_eq!(json, r#"["shredded"]"#);
    }

    #[test]
    fn test_resistances_from_iter() {
        let resist: Resistances = [DamageType::Energy, DamageType::Burn].into_iter().collect();
        assert!(resist.contains(DamageType::Energy));
        assert!(resist.contains(DamageType::Burn));
        assert!(!resist.contains(DamageType::Kinetic));
    }
}
