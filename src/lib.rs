//! Sargam Notation Converter WASM Module
//!
//! Converts abbreviated sargam notes (s, r1, g3, P, ...) into Western pitch
//! classes relative to a user-supplied scale, and renders plain-text reports
//! of a conversion. The browser UI calls into the `api` module.

pub mod api;
pub mod config;
pub mod convert;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use config::{ConversionSettings, UnknownTokenPolicy};
pub use convert::{convert, ConversionError, Converter};
pub use models::{NoteTable, Scale};
pub use report::{render_report, save_report, ConversionReport, ReportError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Sargam notation converter WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        api::helpers::log_warn(&format!("logger already initialized: {}", e));
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
