use std::fs;

use serde_json::Value;
use thiserror::Error;

use super::comment::{strip_comments, strip_trailing_commas};
use crate::core::{Dialect, LocaleRecord, SourceFile};

/// Why a translation file could not be turned into a [`LocaleRecord`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid {dialect}: {message}")]
    Syntax { dialect: Dialect, message: String },

    #[error("top-level value must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("value for key \"{key}\" must be a string, found {found}")]
    NonStringValue { key: String, found: &'static str },
}

/// Read a translation file fully into memory and parse it by its dialect.
pub fn parse_locale_file(file: &SourceFile) -> Result<LocaleRecord, ParseError> {
    let content = fs::read_to_string(&file.path)?;
    parse_locale_source(&content, file.dialect)
}

/// Parse translation text of the given dialect into a flat record.
///
/// The document must be a single object whose values are all strings.
/// Duplicate keys resolve to the last occurrence.
pub fn parse_locale_source(content: &str, dialect: Dialect) -> Result<LocaleRecord, ParseError> {
    // Editors on Windows like to prepend a BOM.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let value: Value = match dialect {
        Dialect::Json => parse_strict(content, dialect)?,
        Dialect::Json5 => json5::from_str(content).map_err(|e| ParseError::Syntax {
            dialect,
            message: e.to_string(),
        })?,
        Dialect::Jsonc => {
            let cleaned = strip_trailing_commas(&strip_comments(content));
            parse_strict(&cleaned, dialect)?
        }
    };

    flatten_record(value)
}

fn parse_strict(content: &str, dialect: Dialect) -> Result<Value, ParseError> {
    serde_json::from_str(content).map_err(|e| ParseError::Syntax {
        dialect,
        message: e.to_string(),
    })
}

fn flatten_record(value: Value) -> Result<LocaleRecord, ParseError> {
    let Value::Object(map) = value else {
        return Err(ParseError::NotAnObject {
            found: value_kind(&value),
        });
    };

    let mut record = LocaleRecord::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::String(text) => {
                record.insert(key, text);
            }
            other => {
                return Err(ParseError::NonStringValue {
                    key,
                    found: value_kind(&other),
                });
            }
        }
    }
    Ok(record)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
