use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

use crate::config::{Config, LogFormat};
use crate::errors::{LauncherError, LauncherResult};

/// Build the level filter for the configured verbosity
fn level_filter(config: &Config) -> EnvFilter {
    EnvFilter::default().add_directive(LevelFilter::from_level(config.log_level()).into())
}

/// Initialize the global subscriber
///
/// Records go to stderr so the editor's own output on stdout stays untouched.
/// Called once at startup; a second call fails with
/// [`LauncherError::LoggingInitialization`].
pub fn init_logging(config: &Config) -> LauncherResult<()> {
    let filter = level_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format() {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| LauncherError::LoggingInitialization(e.to_string()))
}
