//! Selection and popup handoff
//!
//! A text selection is validated before being handed to the popup, which
//! receives it through a `?hex=` URL parameter when it cannot be messaged
//! directly.

use crate::input;

/// Title used for user-facing notifications
pub const NOTIFICATION_TITLE: &str = "HID Card Calculator";

/// Name of the popup URL parameter carrying the hex value
pub const HEX_PARAM: &str = "hex";

/// Errors that can occur while handing off a value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    #[error("Invalid hex value selected. Please select a valid hex string (0-9, A-F).")]
    InvalidSelection,
}

/// Geometry of the detached popout window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoutWindow {
    pub width: u32,
    pub height: u32,
}

impl Default for PopoutWindow {
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
        }
    }
}

/// Validate a text selection, returning the trimmed hex string
pub fn validate_selection(text: &str) -> Result<String, HandoffError> {
    let text = input::normalize(text);
    if !input::is_hex(text) {
        tracing::debug!(selection = text, "rejected selection");
        return Err(HandoffError::InvalidSelection);
    }
    Ok(text.to_string())
}

/// Build the popup URL that pre-populates `hex`
pub fn popup_url(base: &str, hex: &str) -> String {
    format!("{}?{}={}", base, HEX_PARAM, urlencoding::encode(hex))
}

/// Extract the `hex` parameter from a popup URL
///
/// Returns `None` when the parameter is absent or empty. Keys and values are
/// percent-decoded with `+` as a space, as in form encoding; bytes that are
/// not valid UTF-8 become U+FFFD. The first `hex` key wins.
pub fn hex_from_url(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if form_decode(key) != HEX_PARAM {
            continue;
        }

        let decoded = form_decode(value);
        if decoded.is_empty() {
            return None;
        }
        return Some(decoded);
    }

    None
}

/// Percent-decode one form-encoded component, replacing invalid UTF-8
fn form_decode(component: &str) -> String {
    let component = component.replace('+', " ");
    let bytes = urlencoding::decode_binary(component.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
