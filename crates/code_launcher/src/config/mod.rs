use std::path::PathBuf;

use clap::ValueEnum;
use derive_getters::Getters;
use tracing::Level;

/// Directory searched when none is given
pub const DEFAULT_DIRECTORY: &str = ".";

/// How log records are rendered on stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per record
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Getters)]
pub struct Config {
    directories: Vec<PathBuf>,
    dry_run: bool,
    verbosity: u8,
    log_format: LogFormat,
}

impl Config {
    /// An empty directory list falls back to the current directory.
    pub fn new(
        directories: Vec<PathBuf>,
        dry_run: bool,
        verbosity: u8,
        log_format: LogFormat,
    ) -> Self {
        let directories = if directories.is_empty() {
            vec![PathBuf::from(DEFAULT_DIRECTORY)]
        } else {
            directories
        };

        Self {
            directories,
            dry_run,
            verbosity,
            log_format,
        }
    }

    /// Maximum log level: warn by default, info with one `-v`, debug with two or more
    pub fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}
