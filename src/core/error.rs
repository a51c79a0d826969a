//! Domain errors
//!
//! All of these are rejected preconditions, not system faults. They are
//! returned to the immediate caller and never retried.

use thiserror::Error;

/// Where a name lookup was performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The full catalog
    Catalog,
    /// The shopping cart
    Cart,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog => write!(f, "in the catalog"),
            Self::Cart => write!(f, "in the shopping cart"),
        }
    }
}

/// Errors raised by cart and store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An item with this exact name is already in the cart
    #[error("Item '{name}' already exists in the shopping cart.")]
    ItemAlreadyExists {
        /// Name of the item already present
        name: String,
    },

    /// No item matched the lookup
    #[error("No item matching '{query}' exists {scope}.")]
    ItemNotExist {
        /// The name or substring that was looked up
        query: String,
        /// Where the lookup was performed
        scope: Scope,
    },

    /// A substring lookup was ambiguous
    #[error("Multiple items match the name substring '{query}' {scope}: {}", .matches.join(", "))]
    TooManyMatches {
        /// The substring that was looked up
        query: String,
        /// Where the lookup was performed
        scope: Scope,
        /// Names of every matching item, sorted
        matches: Vec<String>,
    },
}

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two catalog records share a name
    #[error("duplicate item name in catalog: '{name}'")]
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// Price coerced to a negative integer
    #[error("item '{name}' has a negative price: {price}")]
    NegativePrice {
        /// Item name
        name: String,
        /// The coerced price
        price: i64,
    },

    /// Price could not be coerced to an integer
    #[error("item '{name}' has an invalid price: {value}")]
    InvalidPrice {
        /// Item name
        name: String,
        /// The raw value as written in the catalog
        value: String,
    },

    /// Sum of all catalog prices does not fit in a `u64`
    ///
    /// Bounding the whole catalog keeps every cart subtotal representable.
    #[error("catalog prices overflow at item '{name}'")]
    PriceOverflow {
        /// First item whose price pushed the running total past `u64::MAX`
        name: String,
    },
}

/// Convenience alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
