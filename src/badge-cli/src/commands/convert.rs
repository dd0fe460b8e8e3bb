//! Hex/decimal conversion command handler

use anyhow::{Context, Result};
use badge::{Conversion, Direction};

use crate::cli::OutputFormat;

fn render(conversion: &Conversion, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{} -> {} ({})",
            conversion.input, conversion.result, conversion.direction
        )),
        OutputFormat::Json => {
            serde_json::to_string_pretty(conversion).context("Failed to serialize conversion")
        }
    }
}

/// Handle the convert command
pub fn handle(value: &str, direction: Direction, format: OutputFormat, report: bool) -> Result<()> {
    let conversion = badge::convert(direction, value)
        .with_context(|| format!("Failed to convert ({})", direction))?;

    if report {
        println!("{}", badge::conversion_report(&conversion));
    } else {
        println!("{}", render(&conversion, format)?);
    }

    Ok(())
}
