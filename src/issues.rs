//! Issue types raised during an overlay run.
//!
//! No issue is fatal. Each one maps to a [`Severity`] that decides which log
//! channel it goes to; the run then skips the affected unit (a file, a locale,
//! or the dialogue pass) and carries on.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::ParseError;

// ============================================================
// Severity
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

// ============================================================
// Issues
// ============================================================

#[derive(Debug, Error)]
pub enum OverlayIssue {
    /// The directory for a configured locale code does not exist.
    #[error("no translation directory for locale \"{code}\" at {}", path.display())]
    MissingLocaleRoot { code: String, path: PathBuf },

    /// A file could not be parsed as its declared dialect.
    #[error("failed to parse {}: {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A directory entry could not be read while walking a locale root.
    #[error("cannot access path: {0}")]
    WalkFailure(#[from] walkdir::Error),

    /// The host has no reference locale to gate against.
    #[error("reference locale \"{code}\" is not loaded, skipping locale \"{target}\"")]
    MissingReferenceLocale { code: String, target: String },

    /// The host does not know the configured target locale.
    #[error("locale \"{code}\" is unknown to the host, skipping its files")]
    MissingTargetLocale { code: String },

    /// The host has no dialogue store.
    #[error("dialogue store is not available")]
    MissingDialogueStore,

    /// The dialogue pass failed as a whole.
    #[error("dialogue overlay failed: {0}")]
    DialoguePassFailure(#[source] Box<OverlayIssue>),
}

impl OverlayIssue {
    pub fn severity(&self) -> Severity {
        match self {
            OverlayIssue::MissingLocaleRoot { .. } => Severity::Info,
            OverlayIssue::ParseFailure { .. }
            | OverlayIssue::WalkFailure(_)
            | OverlayIssue::MissingReferenceLocale { .. }
            | OverlayIssue::MissingTargetLocale { .. } => Severity::Warning,
            OverlayIssue::MissingDialogueStore | OverlayIssue::DialoguePassFailure(_) => {
                Severity::Error
            }
        }
    }

    pub fn dialogue(cause: OverlayIssue) -> Self {
        OverlayIssue::DialoguePassFailure(Box::new(cause))
    }
}
