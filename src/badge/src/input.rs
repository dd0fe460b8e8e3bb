//! Input validation shared by the decoder, the converter and the selection handoff.

/// Trim surrounding whitespace from user-entered text
pub fn normalize(input: &str) -> &str {
    input.trim()
}

/// True if `input` is non-empty and made only of `0-9`, `a-f`, `A-F`
pub fn is_hex(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_hexdigit())
}

/// True if `input` is non-empty and made only of `0-9`
pub fn is_decimal(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex() {
        assert!(is_hex("0"));
        assert!(is_hex("deadBEEF"));
        assert!(is_hex("0123456789abcdefABCDEF"));
        assert!(!is_hex(""));
        assert!(!is_hex("0x1F"));
        assert!(!is_hex("12 34"));
        assert!(!is_hex("G1"));
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("0"));
        assert!(is_decimal("0042"));
        assert!(!is_decimal(""));
        assert!(!is_decimal("-1"));
        assert!(!is_decimal("1A"));
        assert!(!is_decimal("1.5"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Fullwidth and Arabic-Indic digits are not accepted
        assert!(!is_decimal("１２"));
        assert!(!is_hex("٣"));
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  1F \n"), "1F");
        assert_eq!(normalize("\t"), "");
    }
}
