//! locale-overlay - overlay translated text onto a host's localization data
//!
//! A mod ships translation files under `db/locales/<code>/`. At host startup
//! the overlay engine walks those files, parses them (JSON, JSON5 or JSONC),
//! keeps only keys the reference locale ("en") defines, and writes them into
//! the host's table for each target locale. A second pass patches existing
//! dialogue text from `db/locales/<code>/dialogue/`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface for the standalone snapshot host
//! - `config`: Configuration file loading and parsing
//! - `core`: The overlay engine and host contract
//! - `issues`: Issue types raised during a run
//! - `report`: Run statistics and the end-of-run summary

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod report;
