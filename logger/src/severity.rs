use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown severity '{0}'. Expected one of debug, info, warn, error, fatal.")]
pub struct ParseSeverityError(pub String);

/// Severity of a log line, ordered from least to most urgent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Fixed five column label printed between the brackets.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => " INFO",
            Severity::Warning => " WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// SGR foreground code used for the label when color is on.
    pub fn color_code(self) -> &'static str {
        match self {
            Severity::Debug => "34",
            Severity::Info => "32",
            Severity::Warning => "33",
            Severity::Error => "31",
            Severity::Fatal => "35",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().trim_start())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "0" => Ok(Severity::Debug),
            "info" | "1" => Ok(Severity::Info),
            "warn" | "warning" | "2" => Ok(Severity::Warning),
            "error" | "err" | "3" => Ok(Severity::Error),
            "fatal" | "4" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
