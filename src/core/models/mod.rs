//! Domain models for storecart
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Item`] - A catalog entry (name, price, tags, description)
//! - [`ShoppingCart`] - The items a user has selected, keyed by name

mod cart;
mod item;

pub use cart::ShoppingCart;
pub use item::Item;
