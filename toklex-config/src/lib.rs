//! Toklex Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Toklex crates.

use serde::Deserialize;

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("toklex::{}", self.as_str())
    }
}

/// Log verbosity as written in config files
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name; "silent" maps to `Error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// How the token stream is rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// All tokens on one line, separated by a space
    #[default]
    Plain,
    /// One token per line
    Lines,
    /// Pretty-printed JSON array
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Some(OutputFormat::Plain),
            "lines" => Some(OutputFormat::Lines),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Configuration for token output
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Whether to print source spans next to tokens
    pub show_spans: bool,
}

/// Shape of the `toklex.json` project file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToklexConfig {
    /// Output configuration
    pub output: OutputConfig,
    /// Global log level
    pub log_level: Option<LogLevel>,
    /// Lexer-only log level override
    pub lexer_log_level: Option<LogLevel>,
}

impl ToklexConfig {
    /// Parse a config from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
