//! Catalog commands - list and search

use storecart::output::{ItemInfo, ItemListResult, Render};

use super::Context;

/// Print the whole catalog in load order
pub fn items(ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    ItemListResult::new(ItemInfo::from_items(store.get_items())).render(ctx.mode)?;
    Ok(())
}

/// Print items whose name contains `text`, ranked
pub fn search(ctx: &Context, text: &str) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let results = store.search_by_name(text);
    ItemListResult::new(ItemInfo::from_items(&results)).render(ctx.mode)?;
    Ok(())
}

/// Print items tagged exactly `hashtag`, ranked
pub fn tag(ctx: &Context, hashtag: &str) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let results = store.search_by_hashtag(hashtag.trim_start_matches('#'));
    ItemListResult::new(ItemInfo::from_items(&results)).render(ctx.mode)?;
    Ok(())
}
