pub mod launch;
pub mod workspace;

pub use launch::{LaunchCommand, LaunchOutcome};
pub use workspace::resolve_workspaces;
