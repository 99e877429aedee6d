//! List store
//!
//! In-memory mirror of the remote list for the current owner. Order is the
//! server-confirmed order; nothing here re-sorts. Callers only mutate after
//! the matching remote call succeeded.

use std::collections::HashSet;

use crate::domain::entities::{ItemId, ShoppingListItem};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListStore {
    items: Vec<ShoppingListItem>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fetched snapshot
    pub fn load(&mut self, items: Vec<ShoppingListItem>) {
        let mut seen = HashSet::with_capacity(items.len());
        let mut kept = Vec::with_capacity(items.len());

        for item in items {
            if seen.insert(item.id) {
                kept.push(item);
            } else {
                tracing::warn!(id = %item.id, "Dropping duplicate item id from loaded list");
            }
        }

        self.items = kept;
    }

    /// Add a confirmed item at the end. Returns false on a duplicate id.
    pub fn append(&mut self, item: ShoppingListItem) -> bool {
        if self.contains(item.id) {
            tracing::warn!(id = %item.id, "Ignoring append of duplicate item id");
            return false;
        }

        self.items.push(item);
        true
    }

    /// Replace the entry with `id` in place. Returns false if it is gone.
    pub fn replace(&mut self, id: ItemId, item: ShoppingListItem) -> bool {
        if item.id != id && self.contains(item.id) {
            tracing::warn!(
                id = %id,
                returned_id = %item.id,
                "Ignoring replacement that would duplicate an item id"
            );
            return false;
        }

        match self.position(id) {
            Some(index) => {
                self.items[index] = item;
                true
            }
            None => {
                tracing::warn!(id = %id, "Stale selection: no item to replace");
                false
            }
        }
    }

    pub fn remove(&mut self, id: ItemId) -> Option<ShoppingListItem> {
        self.position(id).map(|index| self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: ItemId) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Item at a 1-based position, as shown to the user
    pub fn get_by_index(&self, position: usize) -> Option<&ShoppingListItem> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingListItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
