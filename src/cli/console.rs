use colored::{Color, Colorize};

use crate::core::log::{LogColor, LogSink};

/// Terminal sink: info to stdout, warnings and errors to stderr.
///
/// Colors follow the usual `NO_COLOR` / `CLICOLOR` conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    verbose: bool,
}

impl ConsoleSink {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl LogSink for ConsoleSink {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".bold().red(), message);
    }

    fn with_color(&self, message: &str, color: LogColor) {
        println!("{}", message.color(to_color(color)));
    }

    fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "debug:".dimmed(), message);
        }
    }
}

fn to_color(color: LogColor) -> Color {
    match color {
        LogColor::Green => Color::Green,
        LogColor::Yellow => Color::Yellow,
        LogColor::Red => Color::Red,
        LogColor::Cyan => Color::Cyan,
        LogColor::Blue => Color::Blue,
        LogColor::Magenta => Color::Magenta,
    }
}
