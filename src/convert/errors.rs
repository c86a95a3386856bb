//! Error types for note conversion

use thiserror::Error;

/// Conversion failure for a single call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Token (after scale override) has no entry in the note table
    #[error("Unrecognized note token '{token}' at position {position}")]
    UnknownToken { token: String, position: usize },
}
