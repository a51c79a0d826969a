//! Config command - show resolved settings

use storecart::config::GlobalConfig;
use storecart::output::OutputMode;

use super::Context;

/// Print the config file location and the catalog that would be used
pub fn config(ctx: &Context) -> anyhow::Result<()> {
    let config_path = GlobalConfig::config_path();
    let resolved = ctx.resolve_catalog();

    if ctx.mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "config_file": config_path,
                "config_file_exists": config_path.exists(),
                "catalog": resolved,
                "prompt": ctx.config.ui.prompt,
                "color": ctx.config.ui.color,
            })
        );
    } else {
        let status = if config_path.exists() { "" } else { " (not found)" };
        println!("Config file: {}{status}", config_path.display());
        println!("Catalog:     {} ({})", resolved.path.display(), resolved.origin);
    }
    Ok(())
}
