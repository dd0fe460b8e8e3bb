//! Clipboard-ready result text

use crate::convert::Conversion;
use crate::hid35::{Hid35Card, CARD_FORMAT};

/// Multi-line summary of a decoded card, as copied to the clipboard
pub fn hid35_report(card: &Hid35Card) -> String {
    format!(
        "HID 35-bit Card Results:\n\
         Bit Pattern: {}\n\
         Card Format: {}\n\
         Internal Card #: {}\n\
         Facility Code: {}",
        card.bit_pattern, CARD_FORMAT, card.card_number, card.facility_code
    )
}

/// Multi-line summary of a conversion, as copied to the clipboard
pub fn conversion_report(conversion: &Conversion) -> String {
    format!(
        "Conversion Result:\nInput: {}\nResult: {}",
        conversion.input, conversion.result
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{convert, Direction};
    use crate::hid35::decode_hex;

    #[test]
    fn test_hid35_report() {
        let card = decode_hex("401EC475D").unwrap();
        let report = hid35_report(&card);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "HID 35-bit Card Results:",
                "Bit Pattern: 10000000001111011000100011101011101",
                "Card Format: HID Corporate 1000 35 Bit",
                "Internal Card #: 4567",
                "Facility Code: 123",
            ]
        );
    }

    #[test]
    fn test_conversion_report() {
        let conversion = convert(Direction::HexToDec, "ff").unwrap();
        assert_eq!(
            conversion_report(&conversion),
            "Conversion Result:\nInput: ff\nResult: 255"
        );
    }
}
