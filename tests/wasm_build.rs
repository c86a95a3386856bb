//! WASM build test
//!
//! Exercises the JavaScript-facing API in a browser.

#![cfg(target_arch = "wasm32")]

use sargam_converter_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_convert_notes() {
    let result = convert_notes("S R1 | p", "");
    assert_eq!(result.unwrap(), "C C# | g");
}

#[wasm_bindgen_test]
fn test_convert_notes_with_scale() {
    let result = convert_notes("s r g", "s r2 g3");
    assert_eq!(result.unwrap(), "c d e");
}

#[wasm_bindgen_test]
fn test_unknown_token_is_an_error() {
    let result = convert_notes("s r", "");
    let err = result.unwrap_err().as_string().unwrap();
    assert!(err.contains("Unrecognized note token 'r'"));
}

#[wasm_bindgen_test]
fn test_default_settings_when_undefined() {
    let result = convert_notes_with_settings("S", "", JsValue::UNDEFINED);
    assert_eq!(result.unwrap(), "C");
}

#[wasm_bindgen_test]
fn test_report_text() {
    let text = render_conversion_report("s p", "").unwrap();
    assert!(text.contains("Scale: \n"));
    assert!(text.ends_with("c g\n"));
}

#[wasm_bindgen_test]
fn test_note_table_json() {
    let json = note_table_json().unwrap();
    assert!(json.contains(r#"{"token":"r1","western":"c#"}"#));
}
