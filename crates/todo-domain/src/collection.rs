//! Persistent, ordered collection of items.
//!
//! Every transition builds a new collection that shares the untouched items
//! with its predecessor. A transition that matches nothing hands back a clone
//! of the same allocation, so [`ItemCollection::ptr_eq`] tells a caller
//! whether anything changed without comparing items.

use crate::item::{Item, ItemId, SEED_ITEM_ID};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::sync::Arc;
use todo_core::TodoError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Item>")]
pub struct ItemCollection {
    items: Arc<Vec<Arc<Item>>>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection a session starts from: one unchecked item with id 1.
    pub fn seeded(seed_text: impl Into<String>) -> Self {
        Self {
            items: Arc::new(vec![Arc::new(Item::new(SEED_ITEM_ID, seed_text))]),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().map(|item| item.as_ref())
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn last(&self) -> Option<&Item> {
        self.items.last().map(|item| item.as_ref())
    }

    pub fn max_id(&self) -> Option<ItemId> {
        self.iter().map(|item| item.id).max()
    }

    pub fn to_vec(&self) -> Vec<Item> {
        self.iter().cloned().collect()
    }

    /// Whether both collections are the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Whether the item with `id` is the same allocation in both collections.
    pub fn shares_item(&self, other: &Self, id: ItemId) -> bool {
        match (self.entry(id), other.entry(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn entry(&self, id: ItemId) -> Option<&Arc<Item>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn appended(&self, item: Item) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(Arc::new(item));
        Self {
            items: Arc::new(items),
        }
    }

    pub(crate) fn without(&self, id: ItemId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Self {
            items: Arc::new(items),
        }
    }

    /// Replace the item with `id` by `update(item)`, sharing all others.
    pub(crate) fn updated<F>(&self, id: ItemId, update: F) -> Self
    where
        F: Fn(&Item) -> Item,
    {
        if !self.contains(id) {
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Arc::new(update(item.as_ref()))
                } else {
                    Arc::clone(item)
                }
            })
            .collect();
        Self {
            items: Arc::new(items),
        }
    }
}

impl TryFrom<Vec<Item>> for ItemCollection {
    type Error = TodoError;

    /// Rejects a list in which two items share an id.
    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(TodoError::Validation(format!("duplicate item id {}", dup.id)));
        }
        Ok(Self {
            items: Arc::new(items.into_iter().map(Arc::new).collect()),
        })
    }
}

impl Serialize for ItemCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
