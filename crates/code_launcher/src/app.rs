use crate::config::Config;
use crate::errors::LauncherResult;
use crate::service::{LaunchCommand, LaunchOutcome, resolve_workspaces};

/// Resolve every configured directory, then open the workspaces in one editor invocation
pub async fn run(config: &Config) -> LauncherResult<LaunchOutcome> {
    tracing::debug!(
        directories = ?config.directories(),
        dry_run = *config.dry_run(),
        "starting launcher"
    );

    let workspaces = resolve_workspaces(config.directories()).await?;
    let command = LaunchCommand::editor(workspaces);

    command.launch(*config.dry_run()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use crate::errors::LauncherError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_dry_run_with_workspaces() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        tokio::fs::write(first.path().join("x.code-workspace"), "{}")
            .await
            .unwrap();
        tokio::fs::write(second.path().join("y.code-workspace"), "{}")
            .await
            .unwrap();

        let config = Config::new(
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
            true,
            0,
            LogFormat::Text,
        );

        let outcome = run(&config).await.unwrap();
        assert_eq!(outcome, LaunchOutcome::Printed);
    }

    #[tokio::test]
    async fn test_resolution_failure_stops_before_launch() {
        let empty = TempDir::new().unwrap();
        let config = Config::new(vec![empty.path().to_path_buf()], false, 0, LogFormat::Text);

        let result = run(&config).await;
        assert!(matches!(
            result,
            Err(LauncherError::WorkspaceNotFound { count: 0, .. })
        ));
    }
}
