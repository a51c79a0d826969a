//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Item, ShoppingCart};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Something that can be rendered in either output mode
pub trait Render: Serialize {
    /// Write the human-readable form
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Write the result in the given mode
    fn write_to(&self, mode: OutputMode, out: &mut dyn Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.write_human(out),
            OutputMode::Json => {
                let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
                writeln!(out, "{json}")
            },
        }
    }

    /// Render the result to stdout
    fn render(&self, mode: OutputMode) -> io::Result<()> {
        self.write_to(mode, &mut io::stdout().lock())
    }
}

/// Information about an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemInfo {
    /// Item name
    pub name: String,
    /// Price
    pub price: u64,
    /// Tags
    pub hashtags: Vec<String>,
    /// Description
    pub description: String,
}

impl From<&Item> for ItemInfo {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            hashtags: item.hashtags.clone(),
            description: item.description.clone(),
        }
    }
}

impl ItemInfo {
    /// Collect item infos from any sequence of item references
    #[must_use]
    pub fn from_items<'a, I, T>(items: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a T>,
        T: AsRef<Item> + 'a,
    {
        items.into_iter().map(|item| Self::from(item.as_ref())).collect()
    }

    fn write_line(&self, out: &mut dyn Write) -> io::Result<()> {
        let tags = self.hashtags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" ");
        writeln!(out, "  {:<24} {:>8}  {}", self.name.bold(), self.price, tags.dimmed())?;
        if !self.description.is_empty() {
            writeln!(out, "      {}", self.description)?;
        }
        Ok(())
    }
}

/// Result of listing or searching the catalog
#[derive(Debug, Serialize)]
pub struct ItemListResult {
    /// Number of items
    pub total: usize,
    /// Items, in result order
    pub items: Vec<ItemInfo>,
}

impl ItemListResult {
    /// Build from a result sequence, keeping its order
    #[must_use]
    pub fn new(items: Vec<ItemInfo>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

impl Render for ItemListResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.items.is_empty() {
            return writeln!(out, "No items found.");
        }
        for item in &self.items {
            item.write_line(out)?;
        }
        writeln!(out, "{} item(s).", self.total)
    }
}

/// Contents of the shopping cart
#[derive(Debug, Serialize)]
pub struct CartResult {
    /// Cart items, sorted by name
    pub items: Vec<ItemInfo>,
    /// Sum of item prices
    pub subtotal: u64,
}

impl From<&ShoppingCart> for CartResult {
    fn from(cart: &ShoppingCart) -> Self {
        Self {
            items: ItemInfo::from_items(&cart.sorted_items()),
            subtotal: cart.get_subtotal(),
        }
    }
}

impl Render for CartResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.items.is_empty() {
            return writeln!(out, "Cart is empty.");
        }
        writeln!(out, "Cart:")?;
        for item in &self.items {
            item.write_line(out)?;
        }
        writeln!(out, "Subtotal: {}", self.subtotal)
    }
}

/// Result of checking out
#[derive(Debug, Serialize)]
pub struct CheckoutResult {
    /// Items paid for, sorted by name
    pub items: Vec<ItemInfo>,
    /// Total price
    pub total: u64,
}

impl Render for CheckoutResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for item in &self.items {
            item.write_line(out)?;
        }
        writeln!(out, "Total: {}", self.total.to_string().green().bold())
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful operation
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed operation
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl Render for OperationResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.success {
            writeln!(out, "{}", self.message)
        } else {
            writeln!(out, "{} {}", "error:".red().bold(), self.message)
        }
    }
}
