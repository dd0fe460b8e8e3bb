//! Command dispatch
//!
//! Resolves configured defaults and routes each subcommand to its handler.

use anyhow::Result;

use crate::cli::Commands;
use crate::commands;
use crate::config::Config;

/// Dispatch a parsed command
pub fn dispatch(command: Commands) -> Result<()> {
    // Configure manages the file itself; everything else only reads defaults
    if let Commands::Configure {
        format,
        direction,
        show,
    } = command
    {
        return commands::configure::handle(format, direction, show);
    }

    let config = Config::load()?;

    match command {
        Commands::Hid {
            hex,
            format,
            report,
        } => commands::hid::decode(&hex, config.format_or(format), report),

        Commands::Convert {
            value,
            direction,
            format,
            report,
        } => commands::convert::handle(
            &value,
            config.direction_or(direction),
            config.format_or(format),
            report,
        ),

        Commands::Selection {
            text,
            popup_base,
            format,
        } => commands::hid::selection(&text, &popup_base, config.format_or(format)),

        Commands::Url { url, format } => commands::hid::from_url(&url, config.format_or(format)),

        Commands::Batch { input, output } => commands::batch::handle(&input, output.as_deref()),

        Commands::Configure { .. } => unreachable!(), // Handled above before config load
    }
}
