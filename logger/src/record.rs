use std::fmt::{self, Write};

use chrono::{DateTime, Local};

use crate::severity::Severity;

/// Bracketed name of this source file. Every line carries the same prefix.
pub const SOURCE_PREFIX: &str = concat!("[", file!(), "]");

/// Two digit year, 24 hour clock.
pub const TIME_FORMAT: &str = "%y-%m-%d %H:%M:%S";

const TIME_COLOR: &str = "36";

/// A single log line before rendering. Lives only for the duration of one
/// emit call; the message is formatted while rendering.
pub struct LogRecord<'a> {
    pub time: DateTime<Local>,
    pub severity: Severity,
    pub args: fmt::Arguments<'a>,
}

impl<'a> LogRecord<'a> {
    pub fn new(severity: Severity, args: fmt::Arguments<'a>) -> Self {
        Self::at(Local::now(), severity, args)
    }

    pub fn at(time: DateTime<Local>, severity: Severity, args: fmt::Arguments<'a>) -> Self {
        LogRecord { time, severity, args }
    }

    /// Renders `<prefix> <time> [<label>] <message>\n`, wrapping the time and
    /// label in ANSI color sequences when `color` is set.
    pub fn render(&self, color: bool) -> String {
        let time = self.time.format(TIME_FORMAT);
        let label = self.severity.label();
        let mut line = String::with_capacity(64);
        // Writing into a String cannot fail.
        let _ = if color {
            writeln!(
                line,
                "{SOURCE_PREFIX} \x1b[{TIME_COLOR}m{time}\x1b[0m [\x1b[{}m{label}\x1b[0m] {}",
                self.severity.color_code(),
                self.args
            )
        } else {
            writeln!(line, "{SOURCE_PREFIX} {time} [{label}] {}", self.args)
        };
        line
    }
}
