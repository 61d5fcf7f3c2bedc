use std::path::PathBuf;

/// Result type for launcher operations
pub type LauncherResult<T> = Result<T, LauncherError>;

/// Broad category an error belongs to, reported alongside the error when it is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Resolution,
    Launch,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Resolution => "resolution",
            ErrorKind::Launch => "launch",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Launcher errors
#[derive(thiserror::Error, Debug)]
pub enum LauncherError {
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    #[error("Invalid workspace pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("Cannot read directory {}: {source}", directory.display())]
    DirectoryUnreadable {
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Found {count} code-workspace files in {}", directory.display())]
    WorkspaceNotFound { directory: PathBuf, count: usize },
    #[error(
        "Found {count} code-workspace files in {}: {}",
        directory.display(),
        candidates.iter().map(|c| c.display().to_string()).collect::<Vec<_>>().join(", ")
    )]
    AmbiguousWorkspace {
        directory: PathBuf,
        count: usize,
        candidates: Vec<PathBuf>,
    },
    #[error("Failed to launch {program}: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LauncherError::LoggingInitialization(_) => ErrorKind::Configuration,
            LauncherError::InvalidPattern { .. }
            | LauncherError::DirectoryUnreadable { .. }
            | LauncherError::WorkspaceNotFound { .. }
            | LauncherError::AmbiguousWorkspace { .. } => ErrorKind::Resolution,
            LauncherError::LaunchFailed { .. } => ErrorKind::Launch,
        }
    }
}
