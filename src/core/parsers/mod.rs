//! Parsers for translation files.
//!
//! - `json`: dialect-aware parsing of a file into a flat `LocaleRecord`
//! - `comment`: comment and trailing-comma stripping used for JSONC

pub mod comment;
pub mod json;

pub use json::{ParseError, parse_locale_file, parse_locale_source};
