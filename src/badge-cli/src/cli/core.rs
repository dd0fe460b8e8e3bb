//! Core CLI definitions

use badge::Direction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::format::OutputFormat;

#[derive(Parser)]
#[command(name = "badge")]
#[command(about = "Access-control card identifier calculator", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a HID Corporate 1000 35-bit card from hex
    #[command(visible_alias = "h")]
    Hid {
        /// Card value in hex, up to 9 digits (e.g. 401EC475D)
        hex: String,

        /// Output format (uses configured default if not provided)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Print clipboard-ready report text
        #[arg(short, long)]
        report: bool,
    },

    /// Convert between hexadecimal and decimal
    #[command(visible_alias = "x")]
    Convert {
        /// Value to convert
        value: String,

        /// Conversion direction: hex-to-dec or dec-to-hex
        /// (uses configured default if not provided)
        #[arg(short, long)]
        direction: Option<Direction>,

        /// Output format (uses configured default if not provided)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Print clipboard-ready report text
        #[arg(short, long)]
        report: bool,
    },

    /// Validate selected text, decode it and print the popup handoff URL
    #[command(visible_alias = "s")]
    Selection {
        /// Selected text
        text: String,

        /// Popup page the hex value is handed to
        #[arg(long, default_value = "popup.html")]
        popup_base: String,

        /// Output format (uses configured default if not provided)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Decode the hex parameter of a popup URL
    #[command(visible_alias = "u")]
    Url {
        /// Popup URL (e.g. popup.html?hex=401EC475D)
        url: String,

        /// Output format (uses configured default if not provided)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Decode one hex value per line from a file
    #[command(visible_alias = "b")]
    Batch {
        /// Input file with one hex value per line
        input: PathBuf,

        /// Output file for tab-separated results (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default output format
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Set default conversion direction
        #[arg(long)]
        direction: Option<Direction>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
