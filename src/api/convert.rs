//! Conversion operations exposed to the UI
//!
//! The UI passes the two text fields (notes and scale) and shows or
//! downloads whatever comes back. Failures come back as error strings.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error};
use crate::config::ConversionSettings;
use crate::convert::Converter;
use crate::models::NoteTable;
use crate::report::{render_report, ConversionReport};
use crate::{wasm_info, wasm_log};

/// Convert sargam notes to Western notation with default settings
///
/// # Parameters
/// - `indian`: notes as typed, e.g. `"s r1 g3 | p"`
/// - `scale`: space-separated scale tokens, may be empty
#[wasm_bindgen(js_name = convertNotes)]
pub fn convert_notes(indian: &str, scale: &str) -> Result<String, JsValue> {
    wasm_info!("convertNotes called: {} chars, scale '{}'", indian.len(), scale);

    let western = Converter::new()
        .convert(indian, scale)
        .map_err(|e| js_error("Conversion failed", e))?;

    wasm_log!("  converted to {} chars", western.len());
    Ok(western)
}

/// Convert with settings supplied as a JS object
///
/// `settings` may be `undefined`/`null` for defaults, otherwise e.g.
/// `{ unknown_tokens: "verbatim", default_scale: "s r2 g3" }`.
#[wasm_bindgen(js_name = convertNotesWithSettings)]
pub fn convert_notes_with_settings(
    indian: &str,
    scale: &str,
    settings: JsValue,
) -> Result<String, JsValue> {
    wasm_info!("convertNotesWithSettings called: {} chars", indian.len());

    let settings: ConversionSettings = if settings.is_undefined() || settings.is_null() {
        ConversionSettings::default()
    } else {
        deserialize(settings, "Invalid conversion settings")?
    };
    wasm_log!("  settings: {:?}", settings);

    Converter::with_settings(settings)
        .convert(indian, scale)
        .map_err(|e| js_error("Conversion failed", e))
}

/// Convert and return the plain-text report for the UI to save
#[wasm_bindgen(js_name = renderConversionReport)]
pub fn render_conversion_report(indian: &str, scale: &str) -> Result<String, JsValue> {
    wasm_info!("renderConversionReport called");

    let report = ConversionReport::generate(&Converter::new(), indian, scale)
        .map_err(|e| js_error("Conversion failed", e))?;
    let text = render_report(&report).map_err(|e| js_error("Report rendering failed", e))?;

    wasm_log!("  report generated: {} bytes", text.len());
    Ok(text)
}

/// Note table as a JSON array of `{ token, western }` rows
#[wasm_bindgen(js_name = noteTableJson)]
pub fn note_table_json() -> Result<String, JsValue> {
    serde_json::to_string(&NoteTable::global().rows())
        .map_err(|e| js_error("JSON serialization error", e))
}
