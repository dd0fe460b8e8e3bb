//! WebAssembly bindings for badge
//!
//! This module provides JavaScript-friendly bindings for an extension popup.

use crate::convert::{decimal_to_hex as rust_decimal_to_hex, hex_to_decimal as rust_hex_to_decimal};
use crate::handoff::{
    hex_from_url as rust_hex_from_url, popup_url as rust_popup_url,
    validate_selection as rust_validate_selection, PopoutWindow, NOTIFICATION_TITLE,
};
use crate::hid35::{decode_hex, Hid35Card as RustHid35Card, CARD_FORMAT};
use crate::report::hid35_report;
use wasm_bindgen::prelude::*;

/// Decode a 35-bit card from its hex form
///
/// # Arguments
/// * `hex` - Up to 9 hex digits, surrounding whitespace ignored
///
/// # Returns
/// The decoded card, or the descriptive error message
#[wasm_bindgen(js_name = decodeHid35)]
pub fn decode_hid35(hex: &str) -> Result<Hid35Card, JsValue> {
    decode_hex(hex)
        .map(|inner| Hid35Card { inner })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a hex string to decimal
#[wasm_bindgen(js_name = hexToDecimal)]
pub fn hex_to_decimal(hex: &str) -> Result<String, JsValue> {
    rust_hex_to_decimal(hex).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a decimal string to uppercase hex
#[wasm_bindgen(js_name = decimalToHex)]
pub fn decimal_to_hex(decimal: &str) -> Result<String, JsValue> {
    rust_decimal_to_hex(decimal).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate a context-menu selection, returning the trimmed hex
#[wasm_bindgen(js_name = validateSelection)]
pub fn validate_selection(text: &str) -> Result<String, JsValue> {
    rust_validate_selection(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build the popup URL carrying `hex`
#[wasm_bindgen(js_name = popupUrl)]
pub fn popup_url(base: &str, hex: &str) -> String {
    rust_popup_url(base, hex)
}

/// Read the `hex` parameter from a popup URL
#[wasm_bindgen(js_name = hexFromUrl)]
pub fn hex_from_url(url: &str) -> Option<String> {
    rust_hex_from_url(url)
}

/// Popout window size as `[width, height]`
#[wasm_bindgen(js_name = popoutSize)]
pub fn popout_size() -> js_sys::Array {
    let window = PopoutWindow::default();
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_f64(window.width as f64));
    arr.push(&JsValue::from_f64(window.height as f64));
    arr
}

/// Title for extension notifications
#[wasm_bindgen(js_name = notificationTitle)]
pub fn notification_title() -> String {
    NOTIFICATION_TITLE.to_string()
}

/// JavaScript-friendly decoded card
#[wasm_bindgen]
pub struct Hid35Card {
    inner: RustHid35Card,
}

#[wasm_bindgen]
impl Hid35Card {
    #[wasm_bindgen(getter, js_name = bitPattern)]
    pub fn bit_pattern(&self) -> String {
        self.inner.bit_pattern.clone()
    }

    #[wasm_bindgen(getter, js_name = cardFormat)]
    pub fn card_format(&self) -> String {
        CARD_FORMAT.to_string()
    }

    // Decimal strings, as shown in the popup

    #[wasm_bindgen(getter, js_name = cardNumber)]
    pub fn card_number(&self) -> String {
        self.inner.card_number.to_string()
    }

    #[wasm_bindgen(getter, js_name = facilityCode)]
    pub fn facility_code(&self) -> String {
        self.inner.facility_code.to_string()
    }

    /// Clipboard text for these results
    #[wasm_bindgen(js_name = report)]
    pub fn report(&self) -> String {
        hid35_report(&self.inner)
    }
}
