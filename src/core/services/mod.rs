//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - catalog items arrive already constructed.
//!
//! - [`matcher`] - Name substring and exact tag predicates
//! - [`ranking`] - Tag-overlap relevance scoring and ordering
//! - [`store`] - The catalog + cart store

pub mod matcher;
pub mod ranking;
pub mod store;

pub use matcher::{find_unique, name_matches, tag_matches};
pub use ranking::{rank, score, tag_multiset};
pub use store::Store;
