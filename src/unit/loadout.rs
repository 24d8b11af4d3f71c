//! Loadout items and batched item refreshes
//!
//! Only the fields the engine touches are modeled. An item that has no
//! notion of being loaded (or destroyed, or limited) leaves that field
//! `None`, and refreshes skip it.

use serde::{Deserialize, Serialize};

use crate::pools::BoundedResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destroyed: Option<bool>,
    /// Charges for LIMITED items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<BoundedResource>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            loaded: None,
            destroyed: None,
            uses: None,
        }
    }

    /// Weapon with the LOADING tag
    pub fn loading_weapon(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            loaded: Some(true),
            destroyed: Some(false),
            ..Self::new(id, name)
        }
    }

    /// System with the LIMITED tag
    pub fn limited_system(id: impl Into<String>, name: impl Into<String>, uses: f64) -> Self {
        Self {
            destroyed: Some(false),
            uses: Some(BoundedResource::full(uses)),
            ..Self::new(id, name)
        }
    }

    /// The changes `refresh` would make to this item
    pub fn refresh(&self, refresh: Refresh) -> ItemUpdate {
        let mut update = ItemUpdate::new(&self.id);
        if refresh.repair && self.destroyed.is_some() {
            update.destroyed = Some(false);
        }
        if refresh.reload && self.loaded.is_some() {
            update.loaded = Some(true);
        }
        if refresh.refill {
            if let Some(uses) = self.uses {
                update.uses = Some(uses.max);
            }
        }
        update
    }

    fn apply(&mut self, update: &ItemUpdate) {
        if let Some(loaded) = update.loaded {
            self.loaded = Some(loaded);
        }
        if let Some(destroyed) = update.destroyed {
            self.destroyed = Some(destroyed);
        }
        if let (Some(value), Some(uses)) = (update.uses, self.uses.as_mut()) {
            uses.set(value);
        }
    }
}

/// Which refreshes to perform on an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refresh {
    pub repair: bool,
    pub reload: bool,
    pub refill: bool,
}

impl Refresh {
    pub const RELOAD: Refresh = Refresh {
        repair: false,
        reload: true,
        refill: false,
    };

    pub const ALL: Refresh = Refresh {
        repair: true,
        reload: true,
        refill: true,
    };
}

/// Partial update for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destroyed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<f64>,
}

impl ItemUpdate {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            loaded: None,
            destroyed: None,
            uses: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_none() && self.destroyed.is_none() && self.uses.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loadout {
    pub items: Vec<Item>,
}

impl Loadout {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Batched refresh of every item; items with nothing to change are omitted
    pub fn refresh_all(&self, refresh: Refresh) -> Vec<ItemUpdate> {
        self.items
            .iter()
            .map(|item| item.refresh(refresh))
            .filter(|update| !update.is_empty())
            .collect()
    }

    /// Apply a batch of item updates; unknown ids are ignored
    pub fn apply(&mut self, updates: &[ItemUpdate]) {
        for update in updates {
            if let Some(item) = self.items.iter_mut().find(|item| item.id == update.item_id) {
                item.apply(update);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spent_loadout() -> Loadout {
        let mut cannon = Item::loading_weapon("w1", "Siege Cannon");
        cannon.loaded = Some(false);
        cannon.destroyed = Some(true);

        let mut missiles = Item::limited_system("s1", "Missile Rack", 3.0);
        missiles.uses = Some(BoundedResource::new(0.0, 3.0));

        let plain = Item::new("s2", "Comp/Con");

        Loadout::new(vec![cannon, missiles, plain])
    }

    #[test]
    fn test_reload_only_touches_loading_items() {
        let loadout = spent_loadout();
        let updates = loadout.refresh_all(Refresh::RELOAD);

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].item_id, "w1");
        assert_eq!(updates[0].loaded, Some(true));
        assert_eq!(updates[0].destroyed, None);
    }

    #[test]
    fn test_full_refresh() {
        let mut loadout = spent_loadout();
        let updates = loadout.refresh_all(Refresh::ALL);
        loadout.apply(&updates);

        let cannon = loadout.get("w1").unwrap();
        assert_eq!(cannon.loaded, Some(true));
        assert_eq!(cannon.destroyed, Some(false));

        let missiles = loadout.get("s1").unwrap();
        assert_eq!(missiles.uses.unwrap().value, 3.0);
        assert_eq!(missiles.destroyed, Some(false));
    }

    #[test]
    fn test_unknown_item_updates_are_ignored() {
        let mut loadout = spent_loadout();
        let before = loadout.clone();
        let mut update = ItemUpdate::new("missing");
        update.loaded = Some(true);
        loadout.apply(&[update]);
        assert_eq!(loadout, before);
    }
}
