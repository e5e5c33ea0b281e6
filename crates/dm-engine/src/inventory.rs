//! Ordered, duplicate-free item collection.

use dm_core::ItemId;
use serde::Serialize;

/// Items the player carries, in the order they were acquired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<ItemId>,
}

impl Inventory {
    /// An empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `item` is held.
    pub fn contains(&self, item: &ItemId) -> bool {
        self.items.contains(item)
    }

    /// Append `item` unless already held. Returns true if it was added.
    pub fn insert(&mut self, item: ItemId) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Held items in acquisition order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
