//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use storecart::config::GlobalConfig;
use storecart::output::OutputMode;

/// storecart - catalog search and a shopping cart
#[derive(Parser, Debug)]
#[command(
    name = "storecart",
    version,
    about = "Catalog search and a shopping cart",
    long_about = "Search a fixed item catalog by name or tag and fill a shopping cart.\n\n\
                  Search results are ranked by how many tags they share with the cart.\n\
                  The cart lives for one session; nothing is written back to disk."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Catalog file (TOML, or JSON/YAML by extension)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the whole catalog
    Items,

    /// Search items by name substring
    Search {
        /// Text the item name must contain
        text: String,
    },

    /// Search items by exact tag
    Tag {
        /// Tag to look for (a leading '#' is ignored)
        hashtag: String,
    },

    /// Add items to a fresh cart and print the total
    Checkout {
        /// Name substrings, each resolving to exactly one item
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Start an interactive shopping session (default)
    Shop,

    /// Show resolved configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load();
    if !config.ui.color || output_mode == OutputMode::Json {
        colored::control::set_override(false);
    }

    let ctx = commands::Context {
        catalog: cli.catalog,
        config,
        mode: output_mode,
    };

    match cli.command {
        Some(Command::Items) => commands::items(&ctx),
        Some(Command::Search { text }) => commands::search(&ctx, &text),
        Some(Command::Tag { hashtag }) => commands::tag(&ctx, &hashtag),
        Some(Command::Checkout { names }) => commands::checkout(&ctx, &names),
        Some(Command::Shop) | None => commands::shop(&ctx),
        Some(Command::Config) => commands::config(&ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("storecart v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    }
}
