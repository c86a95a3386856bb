//! Sargam to Western note conversion
//!
//! - `tokenizer`: index-driven scan into note tokens and literals
//! - `converter`: scale override, table lookup and output assembly
//! - `errors`: conversion failures

pub mod converter;
pub mod errors;
pub mod tokenizer;

pub use converter::{convert, Converter};
pub use errors::ConversionError;
pub use tokenizer::{tokenize, Segment};
