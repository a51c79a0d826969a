//! Relevance ranking service
//!
//! A candidate's score is the number of tag overlaps with the cart: for each
//! of its own tags (repeats included), add how many times that tag occurs
//! across the cart items. Results are ordered by score descending, then by
//! name ascending, which is a total order because catalog names are unique.

use std::collections::HashMap;
use std::rc::Rc;

use crate::core::models::Item;

/// Build the tag multiset of a set of items from scratch
///
/// This is the reference rebuild. [`ShoppingCart`](crate::core::ShoppingCart)
/// keeps the same counts incrementally and ranking reads those, so this is
/// for checking them and for scoring item sets that are not a cart.
#[must_use]
pub fn tag_multiset<'a, I>(items: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a Rc<Item>>,
{
    let mut counts = HashMap::new();
    for item in items {
        for tag in &item.hashtags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Relevance of `item` against a cart tag multiset
#[must_use]
pub fn score(item: &Item, cart_tags: &HashMap<String, usize>) -> usize {
    item.hashtags.iter().map(|tag| cart_tags.get(tag).copied().unwrap_or(0)).sum()
}

/// Sort candidates by relevance (descending) then name (ascending)
#[must_use]
pub fn rank(candidates: Vec<Rc<Item>>, cart_tags: &HashMap<String, usize>) -> Vec<Rc<Item>> {
    let mut scored: Vec<(usize, Rc<Item>)> =
        candidates.into_iter().map(|item| (score(&item, cart_tags), item)).collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then_with(|| a.name.cmp(&b.name))
    });

    scored.into_iter().map(|(_, item)| item).collect()
}
