use std::path::{Path, PathBuf};

/// Expand a leading `~` component to the user's home directory
///
/// Paths like `~user/x` or `a/~/b` are returned as they are.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        if rest.as_os_str().is_empty() {
            return home;
        }
        return home.join(rest);
    }
    path.to_path_buf()
}
