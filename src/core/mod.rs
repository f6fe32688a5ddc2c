//! Core overlay engine.
//!
//! ## Module Structure
//!
//! - `data`: source files, locale records and tables, dialogue elements
//! - `file_scanner`: lazy discovery of translation files under a locale root
//! - `parsers`: JSON / JSON5 / JSONC parsing into flat records
//! - `coverage`: classification of a record against the reference locale
//! - `merge`: gated, eager or deferred writes into a target table
//! - `dialogue`: second pass over dialogue elements
//! - `host`: host accessor contract and an in-memory host
//! - `log`: log sink the engine reports through
//! - `overlay`: the run itself

pub mod coverage;
pub mod data;
pub mod dialogue;
pub mod file_scanner;
pub mod host;
pub mod log;
pub mod merge;
pub mod overlay;
pub mod parsers;

pub use data::*;
pub use host::{HostSnapshot, LocaleHost, MemoryHost};
pub use merge::MergeStrategy;
pub use overlay::{Overlay, OverlayContext, OverlayOptions};
pub use parsers::{ParseError, parse_locale_file, parse_locale_source};
