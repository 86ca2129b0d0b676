//! CLI 配置
//!
//! 合并三层配置：命令行参数 > 配置文件（toklex.json）> 默认值

use std::path::{Path, PathBuf};

use toklex_config::{LogLevel, OutputConfig, OutputFormat, Phase, ToklexConfig};
use tracing::Level;

use crate::error::CliError;
use crate::logging::LogFormat;

/// 默认配置文件名（可选）
pub const DEFAULT_CONFIG_FILE: &str = "toklex.json";

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            lexer: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        if target == Phase::Lexer.target() {
            self.lexer.unwrap_or(self.global)
        } else {
            self.global
        }
    }
}

/// Command line overrides, all optional
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<String>,
    pub show_spans: Option<bool>,
    pub log_level: Option<String>,
    pub lexer_log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved run configuration
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output: OutputConfig,
    pub log: LogConfig,
    pub log_format: LogFormat,
    pub log_file: Option<PathBuf>,
}

impl RunOptions {
    /// Merge command line overrides on top of the file configuration
    pub fn resolve(overrides: &Overrides, file: &ToklexConfig) -> Result<Self, CliError> {
        let mut output = file.output.clone();
        if let Some(format) = &overrides.format {
            output.format = OutputFormat::parse(format)
                .ok_or_else(|| CliError::UnknownFormat(format.clone()))?;
        }
        if let Some(show_spans) = overrides.show_spans {
            output.show_spans = show_spans;
        }

        let global = match &overrides.log_level {
            Some(s) => Some(parse_log_level(s)?),
            None => file.log_level,
        };
        let lexer = match &overrides.lexer_log_level {
            Some(s) => Some(parse_log_level(s)?),
            None => file.lexer_log_level,
        };
        let log = LogConfig {
            global: global.map(to_tracing_level).unwrap_or(Level::WARN),
            lexer: lexer.map(to_tracing_level),
        };

        let log_format = match &overrides.log_format {
            Some(s) => LogFormat::parse(s).ok_or_else(|| CliError::UnknownLogFormat(s.clone()))?,
            None => LogFormat::Compact,
        };

        Ok(Self {
            output,
            log,
            log_format,
            log_file: overrides.log_file.clone(),
        })
    }
}

/// Load the config file
///
/// An explicitly given path must exist; the default `toklex.json` is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<ToklexConfig, CliError> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(ToklexConfig::default());
            }
            default
        }
    };

    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    ToklexConfig::from_json(&text).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_log_level(s: &str) -> Result<LogLevel, CliError> {
    LogLevel::parse(s).ok_or_else(|| CliError::UnknownLogLevel(s.to_string()))
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}
