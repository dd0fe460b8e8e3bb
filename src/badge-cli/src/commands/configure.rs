//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up badge CLI defaults.

use crate::cli::OutputFormat;
use crate::config::Config;
use anyhow::Result;
use badge::Direction;

/// Handle the configure command
///
/// # Arguments
/// * `format` - Optional default output format to set
/// * `direction` - Optional default conversion direction to set
/// * `show` - If true, show current configuration
pub fn handle(format: Option<OutputFormat>, direction: Option<Direction>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if format.is_none() && direction.is_none() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, format, direction);
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Apply requested defaults, leaving unspecified ones untouched
fn apply(config: &mut Config, format: Option<OutputFormat>, direction: Option<Direction>) {
    if let Some(format) = format {
        config.format = Some(format);
    }
    if let Some(direction) = direction {
        config.direction = Some(direction);
    }
}

/// Display current configuration
fn show_config(config: &Config) {
    match config.format {
        Some(format) => println!("Output format: {:?}", format),
        None => println!("Output format: (default) {:?}", OutputFormat::default()),
    }
    match config.direction {
        Some(direction) => println!("Direction: {}", direction),
        None => println!("Direction: (default) {}", Direction::default()),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: badge configure --format <text|json>");
    println!("   or: badge configure --direction <hex-to-dec|dec-to-hex>");
    println!("   or: badge configure --show");
}
