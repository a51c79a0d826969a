//! Checkout command - one-shot cart total

use storecart::output::{CheckoutResult, ItemInfo, Render};

use super::Context;

/// Add each name to a fresh cart, in order, then print the total
///
/// The first store error aborts the command.
pub fn checkout(ctx: &Context, names: &[String]) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;

    for name in names {
        store.add_item(name)?;
    }

    let result = CheckoutResult {
        items: ItemInfo::from_items(&store.cart().sorted_items()),
        total: store.checkout(),
    };
    result.render(ctx.mode)?;
    Ok(())
}
