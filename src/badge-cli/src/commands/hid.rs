//! 35-bit card command handlers
//!
//! Covers the three ways a card value arrives: typed directly, taken from a
//! text selection, or handed off through a popup URL.

use anyhow::{Context, Result};
use badge::Hid35Card;
use serde::Serialize;

use crate::cli::OutputFormat;

/// JSON shape for a decoded card
#[derive(Serialize)]
struct CardOutput<'a> {
    hex: String,
    card_format: &'static str,
    #[serde(flatten)]
    card: &'a Hid35Card,
}

fn card_output(card: &Hid35Card) -> CardOutput<'_> {
    CardOutput {
        hex: card.hex(),
        card_format: card.card_format(),
        card,
    }
}

/// Render a decoded card in the requested format
pub fn render(card: &Hid35Card, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(card.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&card_output(card)).context("Failed to serialize card")
        }
    }
}

/// Decode a card typed on the command line
pub fn decode(hex: &str, format: OutputFormat, report: bool) -> Result<()> {
    let card = badge::decode_hex(hex).context("Failed to decode card")?;

    if report {
        println!("{}", badge::hid35_report(&card));
    } else {
        println!("{}", render(&card, format)?);
    }

    Ok(())
}

/// Render a handed-off selection: the popup URL followed by the card
fn render_selection(url: &str, card: &Hid35Card, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Popup URL:       {}\n{}",
            url,
            render(card, format)?
        )),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "popup_url": url,
                "card": card_output(card),
            });
            serde_json::to_string_pretty(&value).context("Failed to serialize selection")
        }
    }
}

/// Validate a text selection, decode it and show the popup handoff URL
pub fn selection(text: &str, popup_base: &str, format: OutputFormat) -> Result<()> {
    let hex = badge::validate_selection(text)?;
    let url = badge::popup_url(popup_base, &hex);
    tracing::info!(%url, "selection handed off");

    let card = badge::decode_hex(&hex).context("Failed to decode selection")?;
    println!("{}", render_selection(&url, &card, format)?);

    Ok(())
}

/// Decode the hex parameter of a popup URL
pub fn from_url(url: &str, format: OutputFormat) -> Result<()> {
    let hex = badge::hex_from_url(url)
        .with_context(|| format!("No hex parameter in URL: {}", url))?;
    tracing::debug!(%hex, "hex value from URL");

    decode(&hex, format, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let card = badge::decode_hex("401EC475D").unwrap();
        let text = render(&card, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Bit Pattern:     10000000001111011000100011101011101"));
        assert!(text.contains("Facility Code:   123"));
    }

    #[test]
    fn test_render_json() {
        let card = badge::decode_hex("401EC475D").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&card, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["hex"], "401EC475D");
        assert_eq!(json["card_format"], "HID Corporate 1000 35 Bit");
        assert_eq!(json["facility_code"], 123);
        assert_eq!(json["card_number"], 4567);
        assert_eq!(json["value"], 17_212_131_165u64);
    }

    #[test]
    fn test_selection_json_fields() {
        let card = badge::decode_hex("401EC475D").unwrap();
        let url = badge::popup_url("popup.html", &card.hex());
        let rendered = render_selection(&url, &card, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["popup_url"], "popup.html?hex=401EC475D");
        assert_eq!(json["card"]["hex"], "401EC475D");
        assert_eq!(json["card"]["card_format"], "HID Corporate 1000 35 Bit");
        assert_eq!(json["card"]["facility_code"], 123);
        assert_eq!(json["card"]["card_number"], 4567);
    }

    #[test]
    fn test_selection_text_leads_with_url() {
        let card = badge::decode_hex("401EC475D").unwrap();
        let url = badge::popup_url("popup.html", &card.hex());
        let text = render_selection(&url, &card, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Popup URL:       popup.html?hex=401EC475D\n"));
        assert!(text.contains("Internal Card #: 4567"));
    }

    #[test]
    fn test_selection_accepts_padded_hex() {
        assert!(selection("  401ec475d \n", "popup.html", OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_decode_invalid_reports_message() {
        let err = decode("XYZ", OutputFormat::Text, false).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Invalid hex format"));
    }

    #[test]
    fn test_selection_rejects_non_hex() {
        let err = selection("not hex", "popup.html", OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("Invalid hex value selected"));
    }

    #[test]
    fn test_from_url_without_param() {
        let err = from_url("popup.html", OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("No hex parameter"));
    }

    #[test]
    fn test_from_url_decodes() {
        assert!(from_url("popup.html?hex=401EC475D", OutputFormat::Text).is_ok());
    }
}
