//! Core data types shared by every stage of the overlay run.
//!
//! ## Module Structure
//!
//! - `source`: discovered translation files and their dialect
//! - `locale`: flat translation records and the host-owned `LocaleTable`
//! - `dialogue`: host dialogue elements with per-locale text tables

pub mod dialogue;
pub mod locale;
pub mod source;

pub use dialogue::DialogueElement;
pub use locale::{LocaleRecord, LocaleTable, Transform};
pub use source::{Dialect, SourceFile};
