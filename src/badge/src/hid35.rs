//! HID Corporate 1000 35-bit card decoding
//!
//! A 35-bit card value is read as a frame of 35 bits, leftmost first
//! (positions 1-35, 1-indexed):
//!
//! ```text
//! [1: parity][2-17: facility code][18-33: card number][34-35: parity]
//! ```
//!
//! Input normally arrives as up to 9 hexadecimal digits.

mod bits;

use std::fmt;

use serde::Serialize;

use crate::input;
use bits::{bit_string, FieldReader};

/// Display name of the decoded card format
pub const CARD_FORMAT: &str = "HID Corporate 1000 35 Bit";

/// Number of bits in a card frame
pub const HID35_BITS: usize = 35;

/// Largest value that fits in a card frame
pub const HID35_MAX_VALUE: u64 = (1 << HID35_BITS) - 1;

/// Maximum number of hex digits accepted for a card value
pub const HID35_MAX_HEX_LEN: usize = 9;

const FACILITY_CODE_BITS: usize = 16;
const CARD_NUMBER_BITS: usize = 16;
const TRAILING_BITS: usize = 2;

/// Errors that can occur while decoding a card value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Please enter a hex value")]
    Empty,

    #[error("Invalid hex format. Please use only 0-9 and A-F characters.")]
    InvalidHex,

    #[error("Hex value too long. Maximum 9 characters for 35-bit format.")]
    TooLong,

    #[error("Value {0:#X} does not fit in 35 bits")]
    ValueTooLarge(u64),
}

/// Decoded fields of a 35-bit card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hid35Card {
    /// Raw card value
    pub value: u64,
    /// Full 35-character binary rendition of the value
    pub bit_pattern: String,
    pub facility_code: u16,
    pub card_number: u16,
    /// Bit at position 1
    pub leading_bit: u8,
    /// Bits at positions 34-35
    pub trailing_bits: u8,
}

impl Hid35Card {
    /// Display name of the card format
    pub fn card_format(&self) -> &'static str {
        CARD_FORMAT
    }

    /// Value as uppercase hex, without prefix
    pub fn hex(&self) -> String {
        format!("{:X}", self.value)
    }
}

impl fmt::Display for Hid35Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bit Pattern:     {}", self.bit_pattern)?;
        writeln!(f, "Card Format:     {}", CARD_FORMAT)?;
        writeln!(f, "Internal Card #: {}", self.card_number)?;
        write!(f, "Facility Code:   {}", self.facility_code)
    }
}

/// Decode a card value of up to 35 bits
pub fn decode_35bit(value: u64) -> Result<Hid35Card, DecodeError> {
    if value > HID35_MAX_VALUE {
        return Err(DecodeError::ValueTooLarge(value));
    }

    // The frame is exactly 1 + 16 + 16 + 2 bits, so every read succeeds
    let mut reader = FieldReader::new(value, HID35_BITS);
    let leading = reader.read_bits(1).unwrap_or_default();
    let facility = reader.read_bits(FACILITY_CODE_BITS).unwrap_or_default();
    let card = reader.read_bits(CARD_NUMBER_BITS).unwrap_or_default();
    let trailing = reader.read_bits(TRAILING_BITS).unwrap_or_default();
    debug_assert_eq!(reader.remaining_bits(), 0);

    let card = Hid35Card {
        value,
        bit_pattern: bit_string(value, HID35_BITS),
        facility_code: facility as u16,
        card_number: card as u16,
        leading_bit: leading as u8,
        trailing_bits: trailing as u8,
    };

    tracing::debug!(
        value = card.value,
        facility_code = card.facility_code,
        card_number = card.card_number,
        "decoded 35-bit card"
    );

    Ok(card)
}

/// Decode a card from its hexadecimal form
///
/// Surrounding whitespace is ignored. The value must be 1-9 hex digits and
/// fit in 35 bits.
pub fn decode_hex(hex: &str) -> Result<Hid35Card, DecodeError> {
    let hex = input::normalize(hex);

    if hex.is_empty() {
        return Err(DecodeError::Empty);
    }
    if !input::is_hex(hex) {
        return Err(DecodeError::InvalidHex);
    }
    if hex.len() > HID35_MAX_HEX_LEN {
        return Err(DecodeError::TooLong);
    }

    // At most 9 hex digits = 36 bits, always fits in u64
    let value = u64::from_str_radix(hex, 16).map_err(|_| DecodeError::InvalidHex)?;
    decode_35bit(value)
}
