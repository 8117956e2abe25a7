/*!
 * Configuration
 * Command line flags with environment variable fallbacks
 */

use crate::core::errors::AppError;
use crate::core::limits::DEFAULT_LOG_FILTER;
use crate::core::types::AppResult;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Rendering of query results, diagnostics and the final listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document per line
    Json,
}

/// Log line layout on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Runtime configuration
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ready-queue",
    version,
    about = "Interactive priority-ordered process ready queue",
    long_about = "Reads commands from standard input until '#':\n  \
                  + <id> <program> <jobType> <priority> <execTime>\n  \
                  - <id>\n  \
                  ? <id>\n  \
                  #\n\
                  then prints the queue in ascending and descending order."
)]
pub struct Config {
    /// Read commands from FILE instead of standard input
    #[arg(short, long, env = "READY_QUEUE_INPUT", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, env = "READY_QUEUE_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log format
    #[arg(long, env = "READY_QUEUE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Tracing filter directive, e.g. "debug" or "ready_queue=trace"
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: OutputFormat::default(),
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Open the configured command source
    pub fn open_input(&self) -> AppResult<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    AppError::Configuration(format!(
                        "cannot open input file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }
}
