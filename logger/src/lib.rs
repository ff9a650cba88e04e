//! Leveled console logging.
//!
//! Each line reads `[<source file>] <YY-MM-DD HH:MM:SS> [<LEVEL>] <message>`.
//! Debug and info lines are dropped unless the printer is verbose, and a
//! fatal line ends the process with status 1 once it has been written.
//!
//! ```no_run
//! use logger::{LevelPrinter, PrinterConfig};
//!
//! let mut printer = LevelPrinter::stdout().with_config(PrinterConfig::new().with_verbose(true));
//! logger::log_info!(printer, "value={}", 42);
//!
//! logger::set_verbose(true);
//! logger::warn!("disk at {}%", 91);
//! ```

use std::fmt;

pub mod config;
pub mod global;
pub mod printer;
pub mod record;
pub mod severity;

pub use config::PrinterConfig;
pub use global::{emit, set_color, set_output, set_verbose};
pub use printer::{LevelPrinter, FATAL_EXIT_CODE};
pub use record::{LogRecord, SOURCE_PREFIX, TIME_FORMAT};
pub use severity::{ParseSeverityError, Severity};

/// Anything that accepts leveled, preformatted lines.
pub trait Logger {
    fn log(&mut self, severity: Severity, args: fmt::Arguments<'_>);

    fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args)
    }

    fn info(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args)
    }

    fn warn(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args)
    }

    fn error(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args)
    }

    /// Writes the line, then terminates the process.
    fn fatal(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, args)
    }
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::emit($crate::Severity::Debug, format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::emit($crate::Severity::Info, format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::emit($crate::Severity::Warning, format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::emit($crate::Severity::Error, format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::emit($crate::Severity::Fatal, format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.debug(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.info(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.warn(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.error(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.fatal(format_args!($($arg)+))
    }};
}
