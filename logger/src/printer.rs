use std::{
    fmt,
    io::{self, Stdout, Write},
    mem,
};

use crate::{config::PrinterConfig, record::LogRecord, severity::Severity, Logger};

/// Status the process ends with after a fatal line.
pub const FATAL_EXIT_CODE: i32 = 1;

pub type ExitHook = Box<dyn Fn(i32) + Send>;

/// Formats lines and writes them to a single sink.
///
/// Writes are best effort: an error from the sink is dropped. A fatal line
/// always ends with a call to the exit hook, which is `std::process::exit`
/// unless replaced through [`LevelPrinter::with_exit`].
pub struct LevelPrinter<W: Write> {
    config: PrinterConfig,
    sink: W,
    exit: ExitHook,
}

impl LevelPrinter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LevelPrinter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            config: PrinterConfig::default(),
            sink,
            exit: Box::new(|code| std::process::exit(code)),
        }
    }

    pub fn with_config(mut self, config: PrinterConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the process exit performed after a fatal line.
    pub fn with_exit<F>(mut self, exit: F) -> Self
    where
        F: Fn(i32) + Send + 'static,
    {
        self.exit = Box::new(exit);
        self
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PrinterConfig {
        &mut self.config
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Swaps the sink, handing back the previous one.
    pub fn set_output(&mut self, sink: W) -> W {
        mem::replace(&mut self.sink, sink)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    pub fn emit(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.config.enabled(severity) {
            return;
        }

        let line = LogRecord::new(severity, args).render(self.config.color);
        self.write_line(severity, &line);
    }

    /// Writes an already rendered line without consulting the filter, then
    /// exits if it was fatal.
    pub fn write_line(&mut self, severity: Severity, line: &str) {
        let _ = self.sink.write_all(line.as_bytes());

        if severity == Severity::Fatal {
            // process::exit skips destructors, so buffered sinks must be drained here
            let _ = self.sink.flush();
            (self.exit)(FATAL_EXIT_CODE);
        }
    }
}

impl<W: Write> Logger for LevelPrinter<W> {
    fn log(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        self.emit(severity, args);
    }
}
