//! CLI 错误类型

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// CLI 错误
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read input file '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("Cannot read config '{}': {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config '{}': {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("Unknown output format '{0}'")]
    UnknownFormat(String),

    #[error("Unknown log format '{0}'")]
    UnknownLogFormat(String),

    #[error("Cannot open log file '{}': {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::ReadInput {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("not found"));

        assert_eq!(
            CliError::UnknownLogLevel("loud".to_string()).to_string(),
            "Unknown log level 'loud'"
        );
    }
}
