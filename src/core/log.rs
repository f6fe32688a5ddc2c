//! Log sink the overlay engine writes its notices and summary to.
//!
//! The engine never prints directly; the embedding host decides where messages
//! go. `cli::ConsoleSink` renders them on the terminal, [`RecordingSink`]
//! keeps them in memory for tests.

use std::cell::RefCell;

use crate::issues::{OverlayIssue, Severity};

/// Color hint for [`LogSink::with_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogColor {
    Green,
    Yellow,
    Red,
    Cyan,
    Blue,
    Magenta,
}

pub trait LogSink {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    fn with_color(&self, message: &str, color: LogColor);

    /// Per-file detail. Dropped unless the sink opts in.
    fn debug(&self, _message: &str) {}

    /// Route an issue to the channel matching its severity.
    fn issue(&self, issue: &OverlayIssue) {
        let message = issue.to_string();
        match issue.severity() {
            Severity::Info => self.info(&message),
            Severity::Warning => self.warning(&message),
            Severity::Error => self.error(&message),
        }
    }
}

/// Level of a recorded log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Colored(LogColor),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// A sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: RefCell<Vec<LogEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Messages logged at `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    /// True if any line, at any level, contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|e| e.message.contains(needle))
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

impl LogSink for RecordingSink {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }

    fn with_color(&self, message: &str, color: LogColor) {
        self.push(LogLevel::Colored(color), message);
    }

    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }
}
