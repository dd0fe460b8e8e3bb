//! CLI argument definitions for badge
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod format;

pub use core::{Cli, Commands};
pub use format::OutputFormat;
