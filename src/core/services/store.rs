//! Store service - catalog lookup, ranked search and cart mutation
//!
//! The store owns a fixed catalog and a single shopping cart. The catalog is
//! never modified after construction; only cart membership changes.

use std::collections::HashSet;
use std::rc::Rc;

use log::{debug, info};

use crate::core::error::{CatalogError, Scope, StoreResult};
use crate::core::models::{Item, ShoppingCart};
use crate::core::ports::CatalogSource;

use super::matcher::{find_unique, name_matches, tag_matches};
use super::ranking::rank;

/// A catalog plus one shopping cart
#[derive(Debug, Clone)]
pub struct Store {
    items: Vec<Rc<Item>>,
    cart: ShoppingCart,
}

impl Store {
    /// Build a store over `items` with an empty cart
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateName`] if two items share a name and
    /// [`CatalogError::PriceOverflow`] if the prices of all items together do
    /// not fit in a `u64`.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut total: u64 = 0;
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: item.name.clone(),
                });
            }
            total = total.checked_add(item.price).ok_or_else(|| CatalogError::PriceOverflow {
                name: item.name.clone(),
            })?;
        }

        Ok(Self {
            items: items.into_iter().map(Rc::new).collect(),
            cart: ShoppingCart::new(),
        })
    }

    /// Load items through a catalog source and build a store over them
    pub fn from_source(source: &dyn CatalogSource) -> anyhow::Result<Self> {
        let items = source.load()?;
        let store = Self::new(items)?;
        info!("Loaded {} catalog item(s) from {}", store.items.len(), source.describe());
        Ok(store)
    }

    /// The full catalog, in load order
    #[must_use]
    pub fn get_items(&self) -> &[Rc<Item>] {
        &self.items
    }

    /// Read-only view of the shopping cart
    #[must_use]
    pub const fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    /// Catalog items whose name contains `item_name`, ranked by relevance
    ///
    /// Items already in the cart are never returned.
    #[must_use]
    pub fn search_by_name(&self, item_name: &str) -> Vec<Rc<Item>> {
        let results = self.search(|item| name_matches(item, item_name));
        debug!("search_by_name({item_name:?}) -> {} result(s)", results.len());
        results
    }

    /// Catalog items tagged exactly `hashtag`, ranked by relevance
    ///
    /// Items already in the cart are never returned.
    #[must_use]
    pub fn search_by_hashtag(&self, hashtag: &str) -> Vec<Rc<Item>> {
        let results = self.search(|item| tag_matches(item, hashtag));
        debug!("search_by_hashtag({hashtag:?}) -> {} result(s)", results.len());
        results
    }

    fn search<F>(&self, predicate: F) -> Vec<Rc<Item>>
    where
        F: Fn(&Item) -> bool,
    {
        let candidates = self
            .items
            .iter()
            .filter(|&item| predicate(item) && !self.cart.contains(&item.name))
            .cloned()
            .collect();

        rank(candidates, self.cart.tag_counts())
    }

    /// Add the single catalog item whose name contains `item_name`
    ///
    /// # Errors
    ///
    /// - [`ItemNotExist`](crate::core::error::StoreError::ItemNotExist) when
    ///   no catalog item matches
    /// - [`TooManyMatches`](crate::core::error::StoreError::TooManyMatches)
    ///   when more than one does
    /// - [`ItemAlreadyExists`](crate::core::error::StoreError::ItemAlreadyExists)
    ///   when the match is already in the cart
    pub fn add_item(&mut self, item_name: &str) -> StoreResult<Rc<Item>> {
        let item = find_unique(&self.items, item_name, Scope::Catalog)?;
        self.cart.add_item(Rc::clone(&item))?;
        debug!("Added '{}' to cart (query {item_name:?})", item.name);
        Ok(item)
    }

    /// Remove the single cart item whose name contains `item_name`
    ///
    /// Only cart items are considered, never the wider catalog.
    ///
    /// # Errors
    ///
    /// - [`ItemNotExist`](crate::core::error::StoreError::ItemNotExist) when
    ///   no cart item matches
    /// - [`TooManyMatches`](crate::core::error::StoreError::TooManyMatches)
    ///   when more than one does
    pub fn remove_item(&mut self, item_name: &str) -> StoreResult<Rc<Item>> {
        let item = find_unique(self.cart.items(), item_name, Scope::Cart)?;
        let removed = self.cart.remove_item(&item.name)?;
        debug!("Removed '{}' from cart (query {item_name:?})", removed.name);
        Ok(removed)
    }

    /// Total price of the cart; the cart is left untouched
    #[must_use]
    pub fn checkout(&self) -> u64 {
        let total = self.cart.get_subtotal();
        debug!("Checkout: {} item(s), total {total}", self.cart.len());
        total
    }
}
