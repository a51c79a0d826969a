//! Item matcher service - selects catalog or cart items by query
//!
//! Names are free text and match by substring. Tags are discrete tokens and
//! match only by exact equality.

use std::rc::Rc;

use crate::core::error::{Scope, StoreError, StoreResult};
use crate::core::models::Item;

/// Whether `query` occurs in the item name (case-sensitive, not tokenized)
#[must_use]
pub fn name_matches(item: &Item, query: &str) -> bool {
    item.name.contains(query)
}

/// Whether `hashtag` is exactly one of the item's tags
#[must_use]
pub fn tag_matches(item: &Item, hashtag: &str) -> bool {
    item.has_tag(hashtag)
}

/// Resolve a name substring to exactly one item
///
/// Returns [`StoreError::ItemNotExist`] when nothing matches and
/// [`StoreError::TooManyMatches`] when more than one item does. Ambiguity is
/// never resolved by guessing.
pub fn find_unique<'a, I>(items: I, query: &str, scope: Scope) -> StoreResult<Rc<Item>>
where
    I: IntoIterator<Item = &'a Rc<Item>>,
{
    let mut matches: Vec<&Rc<Item>> =
        items.into_iter().filter(|item| name_matches(item, query)).collect();

    match matches.len() {
        0 => Err(StoreError::ItemNotExist {
            query: query.to_string(),
            scope,
        }),
        1 => Ok(Rc::clone(matches[0])),
        _ => {
            matches.sort_by(|a, b| a.name.cmp(&b.name));
            Err(StoreError::TooManyMatches {
                query: query.to_string(),
                scope,
                matches: matches.iter().map(|item| item.name.clone()).collect(),
            })
        },
    }
}
