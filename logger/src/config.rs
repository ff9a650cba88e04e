use crate::severity::Severity;

/// Color is off by default on Windows consoles, on everywhere else.
pub const DEFAULT_COLOR: bool = !cfg!(windows);

/// Per printer switches. Defaults: quiet (warnings and above only) and
/// platform dependent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrinterConfig {
    pub verbose: bool,
    pub color: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            color: DEFAULT_COLOR,
        }
    }
}

impl PrinterConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Whether a line of this severity would be written at all.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.verbose || severity >= Severity::Warning
    }
}
