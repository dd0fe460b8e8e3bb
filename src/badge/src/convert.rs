//! Hexadecimal <-> decimal string conversion
//!
//! Conversions are exact up to 128 bits. Output hex is uppercase with no
//! prefix; leading zeros on input are accepted and dropped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::input;

/// Errors that can occur during conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Please enter a value to convert")]
    Empty,

    #[error("Invalid hex format. Please use only 0-9 and A-F characters.")]
    InvalidHex,

    #[error("Invalid decimal format. Please use only 0-9 characters.")]
    InvalidDecimal,

    #[error("Value too large: {0} exceeds 128 bits")]
    ValueTooLarge(String),
}

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    HexToDec,
    DecToHex,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::HexToDec => "hex-to-dec",
            Direction::DecToHex => "dec-to-hex",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex-to-dec" | "hextodec" | "h2d" => Ok(Direction::HexToDec),
            "dec-to-hex" | "dectohex" | "d2h" => Ok(Direction::DecToHex),
            other => Err(format!(
                "unknown direction '{}' (expected hex-to-dec or dec-to-hex)",
                other
            )),
        }
    }
}

/// A completed conversion, kept for display and reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub direction: Direction,
    pub input: String,
    pub result: String,
}

/// Convert a hexadecimal string to its decimal rendering
pub fn hex_to_decimal(hex: &str) -> Result<String, ConvertError> {
    if !input::is_hex(hex) {
        return Err(ConvertError::InvalidHex);
    }

    let value = parse_radix(hex, 16)?;
    Ok(value.to_string())
}

/// Convert a decimal string to its uppercase hexadecimal rendering
pub fn decimal_to_hex(decimal: &str) -> Result<String, ConvertError> {
    if !input::is_decimal(decimal) {
        return Err(ConvertError::InvalidDecimal);
    }

    let value = parse_radix(decimal, 10)?;
    Ok(format!("{:X}", value))
}

/// Convert trimmed user input in the given direction
pub fn convert(direction: Direction, value: &str) -> Result<Conversion, ConvertError> {
    let value = input::normalize(value);
    if value.is_empty() {
        return Err(ConvertError::Empty);
    }

    let result = match direction {
        Direction::HexToDec => hex_to_decimal(value)?,
        Direction::DecToHex => decimal_to_hex(value)?,
    };

    tracing::debug!(%direction, input = value, result = %result, "converted value");

    Ok(Conversion {
        direction,
        input: value.to_string(),
        result,
    })
}

/// Parse validated digits; the only possible failure left is overflow
fn parse_radix(digits: &str, radix: u32) -> Result<u128, ConvertError> {
    u128::from_str_radix(digits, radix).map_err(|_| ConvertError::ValueTooLarge(digits.to_string()))
}
