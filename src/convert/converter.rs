//! Sargam → Western conversion
//!
//! Combines the three steps of a conversion:
//! 1. `tokenize()` - split the input into note tokens and literals
//! 2. `Scale::apply()` - alias each token through the caller's scale
//! 3. `NoteTable::get()` - resolve the aliased token to a Western label
//!
//! Literals are copied through unchanged, so whitespace, barlines and line
//! breaks keep their place in the output.

use crate::config::{ConversionSettings, UnknownTokenPolicy};
use crate::convert::errors::ConversionError;
use crate::convert::tokenizer::{tokenize, Segment};
use crate::models::{NoteTable, Scale};

/// Converts sargam text to Western pitch classes
#[derive(Debug, Clone)]
pub struct Converter {
    table: &'static NoteTable,
    settings: ConversionSettings,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::with_settings(ConversionSettings::default())
    }

    pub fn with_settings(settings: ConversionSettings) -> Self {
        Self {
            table: NoteTable::global(),
            settings,
        }
    }

    pub fn settings(&self) -> &ConversionSettings {
        &self.settings
    }

    /// Convert `input` using the space-separated `scale`
    ///
    /// # Errors
    /// `ConversionError::UnknownToken` when a token does not resolve and the
    /// policy is `Strict`.
    ///
    /// # Examples
    /// - `convert("sr1", "")` → `"cc#"`
    /// - `convert("S | P", "")` → `"C | G"`
    /// - `convert("s r g", "s r2 g3")` → `"c d e"`
    pub fn convert(&self, input: &str, scale: &str) -> Result<String, ConversionError> {
        let scale = Scale::parse(self.settings.effective_scale(scale));
        log::debug!("converting {} chars with scale '{}'", input.len(), scale);

        // Labels are at most two bytes, tokens at least one
        let mut output = String::with_capacity(input.len() * 2);

        for segment in tokenize(input) {
            match segment {
                Segment::Literal(c) => output.push(c),
                Segment::Note { token, position } => {
                    let resolved = scale.apply(&token);
                    match self.table.get(&resolved) {
                        Some(label) => output.push_str(label),
                        None => self.unknown_token(&mut output, resolved, position)?,
                    }
                }
            }
        }

        Ok(output)
    }

    fn unknown_token(
        &self,
        output: &mut String,
        token: String,
        position: usize,
    ) -> Result<(), ConversionError> {
        match self.settings.unknown_tokens {
            UnknownTokenPolicy::Strict => {
                log::debug!("unknown token '{}' at {}", token, position);
                Err(ConversionError::UnknownToken { token, position })
            }
            UnknownTokenPolicy::Verbatim => {
                log::warn!("unknown token '{}' at {}, copied verbatim", token, position);
                output.push_str(&token);
                Ok(())
            }
        }
    }
}

/// Convert with default settings
pub fn convert(input: &str, scale: &str) -> Result<String, ConversionError> {
    Converter::new().convert(input, scale)
}
