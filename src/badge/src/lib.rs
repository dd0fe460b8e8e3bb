//! # badge
//!
//! Access-control card identifier library - 35-bit card decoding and
//! hexadecimal/decimal conversion.
//!
//! This library provides functionality to:
//! - Decode the facility code and card number of a 35-bit corporate card
//! - Convert between hexadecimal and decimal strings
//! - Format clipboard-ready result reports
//! - Validate text selections and build popup handoff URLs
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let card = badge::decode_hex("401EC475D")?;
//! assert_eq!(card.facility_code, 123);
//! assert_eq!(card.card_number, 4567);
//!
//! assert_eq!(badge::hex_to_decimal("FF")?, "255");
//! assert_eq!(badge::decimal_to_hex("255")?, "FF");
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod handoff;
pub mod hid35;
pub mod input;
pub mod report;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use convert::{convert, decimal_to_hex, hex_to_decimal, ConvertError, Conversion, Direction};
#[doc(inline)]
pub use handoff::{hex_from_url, popup_url, validate_selection, HandoffError, PopoutWindow};
#[doc(inline)]
pub use hid35::{decode_35bit, decode_hex, DecodeError, Hid35Card, CARD_FORMAT};
#[doc(inline)]
pub use report::{conversion_report, hid35_report};
