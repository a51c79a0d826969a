//! Core domain logic for storecart
//!
//! This module contains pure business logic with no I/O dependencies.
//! Catalog loading is abstracted through the [`ports::CatalogSource`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Item, ShoppingCart)
//! - `services/` - Matching, ranking and the Store
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Store and catalog errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{CatalogError, Scope, StoreError, StoreResult};
pub use models::{Item, ShoppingCart};
pub use services::Store;
