//! Shop command - interactive session over stdin

use std::io::{self, IsTerminal};

use storecart::output::OutputMode;
use storecart::session::Session;

use super::Context;

/// Run an interactive session until `quit` or end of input
pub fn shop(ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    let mut session = Session::new(store, ctx.mode);
    if interactive {
        if ctx.mode == OutputMode::Human {
            println!("storecart v{} - type 'help' for commands", env!("CARGO_PKG_VERSION"));
        }
        session = session.with_prompt(ctx.config.ui.prompt.clone());
    }

    let summary = session.run(stdin.lock(), &mut io::stdout().lock())?;
    log::info!("Session ended after {} command(s)", summary.commands);
    Ok(())
}
