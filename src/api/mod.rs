//! JavaScript-facing API
//!
//! - `helpers`: console logging, argument deserialization, error conversion
//! - `convert`: conversion, report and note-table operations

pub mod helpers;
pub mod convert;

pub use convert::{convert_notes, convert_notes_with_settings, note_table_json, render_conversion_report};
