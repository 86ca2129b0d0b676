//! Toklex CLI - Command line interface
//!
//! Tokenizes a file (or stdin) and prints the token stream.

use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod error;
mod logging;
mod platform;

use crate::config::{load_config, Overrides, RunOptions};
use crate::error::CliError;
use crate::platform::render_tokens;
use toklex_core::tokenize_all;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "toklex",
    about = "Toklex - split source text into lexical tokens",
    version = "0.1.0"
)]
struct Cli {
    /// Input file ("-" or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Configuration file path (default: ./toklex.json if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format: plain, lines, json
    #[arg(short, long)]
    format: Option<String>,

    /// Print line:column (and kind, in lines format) next to each token
    #[arg(long, overrides_with = "no_spans")]
    spans: bool,

    /// Hide spans even if the configuration file enables them
    #[arg(long, overrides_with = "spans")]
    no_spans: bool,

    /// Global log level: silent, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Log level for the lexer only
    #[arg(long)]
    lexer_log_level: Option<String>,

    /// Log output format: pretty, compact, json
    #[arg(long)]
    log_format: Option<String>,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn show_spans(&self) -> Option<bool> {
        match (self.spans, self.no_spans) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format.clone(),
            show_spans: self.show_spans(),
            log_level: self.log_level.clone(),
            lexer_log_level: self.lexer_log_level.clone(),
            log_format: self.log_format.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let file_config = load_config(cli.config.as_deref())?;
    let options = RunOptions::resolve(&cli.overrides(), &file_config)?;
    logging::init_with_file(&options.log, options.log_format, options.log_file.as_ref())?;
    debug!(target: "toklex::cli", ?options, "Resolved run options");

    let source = read_input(cli.input.as_deref())?;
    info!(target: "toklex::cli", bytes = source.len(), "Tokenizing input");

    let tokens = tokenize_all(&source);
    info!(target: "toklex::cli", count = tokens.len(), "Tokenized");

    let rendered = render_tokens(&tokens, &options.output)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    stdout.flush()?;
    Ok(())
}

/// Read the input file, or stdin when no path (or "-") is given
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(CliError::ReadStdin)?;
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_flags() {
        let cli = Cli::try_parse_from(["toklex"]).unwrap();
        assert_eq!(cli.show_spans(), None);

        let cli = Cli::try_parse_from(["toklex", "--spans"]).unwrap();
        assert_eq!(cli.show_spans(), Some(true));

        let cli = Cli::try_parse_from(["toklex", "--no-spans"]).unwrap();
        assert_eq!(cli.show_spans(), Some(false));

        // 后出现的标志生效
        let cli = Cli::try_parse_from(["toklex", "--spans", "--no-spans"]).unwrap();
        assert_eq!(cli.show_spans(), Some(false));
        let cli = Cli::try_parse_from(["toklex", "--no-spans", "--spans"]).unwrap();
        assert_eq!(cli.show_spans(), Some(true));
    }
}
