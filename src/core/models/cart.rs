//! Shopping cart model
//!
//! The cart maps item name to item, which doubles as the membership index.
//! It also keeps a count of every tag occurrence across its items so that
//! relevance ranking never has to rebuild the tag multiset.

use std::collections::HashMap;
use std::rc::Rc;

use crate::core::error::{Scope, StoreError, StoreResult};

use super::Item;

/// A single shopping cart
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: HashMap<String, Rc<Item>>,
    tag_counts: HashMap<String, usize>,
}

impl ShoppingCart {
    /// Create an empty cart
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item keyed by its name
    ///
    /// Fails with [`StoreError::ItemAlreadyExists`] if an item with the same
    /// name is already in the cart.
    pub fn add_item(&mut self, item: Rc<Item>) -> StoreResult<()> {
        if self.items.contains_key(&item.name) {
            return Err(StoreError::ItemAlreadyExists {
                name: item.name.clone(),
            });
        }

        for tag in &item.hashtags {
            *self.tag_counts.entry(tag.clone()).or_insert(0) += 1;
        }
        self.items.insert(item.name.clone(), item);
        Ok(())
    }

    /// Remove the item with exactly this name
    ///
    /// Fails with [`StoreError::ItemNotExist`] if no such item is in the cart.
    pub fn remove_item(&mut self, item_name: &str) -> StoreResult<Rc<Item>> {
        let item = self.items.remove(item_name).ok_or_else(|| StoreError::ItemNotExist {
            query: item_name.to_string(),
            scope: Scope::Cart,
        })?;

        for tag in &item.hashtags {
            if let Some(count) = self.tag_counts.get_mut(tag) {
                *count -= 1;
                if *count == 0 {
                    self.tag_counts.remove(tag);
                }
            }
        }
        Ok(item)
    }

    /// Sum of the prices of every item in the cart
    ///
    /// Saturates at `u64::MAX`. Carts filled through a [`Store`] never reach
    /// it, since the store rejects catalogs whose total price overflows.
    ///
    /// [`Store`]: crate::core::services::Store
    #[must_use]
    pub fn get_subtotal(&self) -> u64 {
        self.items.values().fold(0, |total, item| total.saturating_add(item.price))
    }

    /// Whether an item with exactly this name is in the cart
    #[must_use]
    pub fn contains(&self, item_name: &str) -> bool {
        self.items.contains_key(item_name)
    }

    /// Look up a cart item by exact name
    #[must_use]
    pub fn get(&self, item_name: &str) -> Option<&Rc<Item>> {
        self.items.get(item_name)
    }

    /// Iterate over the cart items (no particular order)
    pub fn items(&self) -> impl Iterator<Item = &Rc<Item>> {
        self.items.values()
    }

    /// Cart items sorted by name, for display
    #[must_use]
    pub fn sorted_items(&self) -> Vec<Rc<Item>> {
        let mut items: Vec<_> = self.items.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// How many times `tag` occurs across all cart items
    #[must_use]
    pub fn tag_count(&self, tag: &str) -> usize {
        self.tag_counts.get(tag).copied().unwrap_or(0)
    }

    /// The full tag multiset of the cart
    #[must_use]
    pub const fn tag_counts(&self) -> &HashMap<String, usize> {
        &self.tag_counts
    }

    /// Number of items in the cart
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
