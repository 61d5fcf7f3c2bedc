//! Workspace file discovery
//!
//! Each directory must hold exactly one entry whose name matches
//! [`WORKSPACE_PATTERN`]. Zero or several matches are hard errors: there is no
//! tie-break, so the wrong workspace is never opened silently.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tokio::fs;

use crate::errors::{LauncherError, LauncherResult};

/// File name pattern of a VS Code workspace descriptor
pub const WORKSPACE_PATTERN: &str = "*.code-workspace";

/// Compile [`WORKSPACE_PATTERN`] into a matcher for directory entry names
pub fn workspace_matcher() -> LauncherResult<GlobMatcher> {
    let glob = GlobBuilder::new(WORKSPACE_PATTERN)
        .literal_separator(true)
        .build()
        .map_err(|source| LauncherError::InvalidPattern {
            pattern: WORKSPACE_PATTERN.to_string(),
            source,
        })?;
    Ok(glob.compile_matcher())
}

/// Find the single workspace file directly inside `directory`
///
/// The returned path is `directory` joined with the matching entry name.
pub async fn resolve_workspace(directory: &Path, matcher: &GlobMatcher) -> LauncherResult<PathBuf> {
    tracing::debug!(directory = %directory.display(), "searching for workspace file");

    let unreadable = |source| LauncherError::DirectoryUnreadable {
        directory: directory.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(directory).await.map_err(unreadable)?;
    let mut matches = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
        let name = entry.file_name();
        if matcher.is_match(&name) {
            matches.push(directory.join(name));
        }
    }

    match matches.len() {
        0 => Err(LauncherError::WorkspaceNotFound {
            directory: directory.to_path_buf(),
            count: 0,
        }),
        1 => {
            let workspace = matches.remove(0);
            tracing::info!(workspace = %workspace.display(), "resolved workspace file");
            Ok(workspace)
        }
        count => {
            matches.sort();
            Err(LauncherError::AmbiguousWorkspace {
                directory: directory.to_path_buf(),
                count,
                candidates: matches,
            })
        }
    }
}

/// Resolve one workspace per directory, keeping the input order
///
/// Stops at the first directory that fails.
pub async fn resolve_workspaces(directories: &[PathBuf]) -> LauncherResult<Vec<PathBuf>> {
    let matcher = workspace_matcher()?;
    let mut workspaces = Vec::with_capacity(directories.len());

    for directory in directories {
        workspaces.push(resolve_workspace(directory, &matcher).await?);
    }

    Ok(workspaces)
}
