//! Models module for the notation converter
//!
//! This module contains the lookup table and the caller-supplied scale
//! used when rewriting sargam tokens into Western pitch classes.

pub mod note_table;
pub mod scale;

// Re-export commonly used types
pub use note_table::{NoteTable, NoteTableRow};
pub use scale::Scale;
