use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

use crate::config::{Config, DEFAULT_DIRECTORY, LogFormat};
use crate::utils::path::expand_home;

/// Code workspace launcher
///
/// Looks for exactly one `*.code-workspace` file in each given directory and
/// opens all of them in a single `code` invocation.
///
/// ## Examples
/// ```bash
/// code-launcher                       # workspace in the current directory
/// code-launcher -d ~/src/api -d ~/src/web
/// code-launcher -n -vv                # print the command instead of running it
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "code-launcher")]
#[command(about = "Open the *.code-workspace file of one or more directories in VS Code")]
#[command(version)]
pub struct Cli {
    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Show verbose debug information, each -v bumps log level
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log the command instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Directory to search for *.code-workspace files
    ///
    /// Repeat to open several workspaces at once; they are passed to the
    /// editor in the order given.
    #[arg(
        short,
        long = "dir",
        value_name = "DIR",
        action = ArgAction::Append,
        default_value = DEFAULT_DIRECTORY,
        value_parser = parse_directory
    )]
    pub dirs: Vec<PathBuf>,
}

fn parse_directory(value: &str) -> Result<PathBuf, String> {
    if value.is_empty() {
        return Err("directory must not be empty".to_string());
    }
    Ok(expand_home(Path::new(value)))
}

impl Cli {
    /// Convert parsed arguments into the immutable run configuration
    pub fn into_config(self) -> Config {
        Config::new(self.dirs, self.dry_run, self.verbose, self.log_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        let argv = std::iter::once("code-launcher").chain(args.iter().copied());
        Cli::try_parse_from(argv).map(Cli::into_config)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(config.directories(), &vec![PathBuf::from(".")]);
        assert!(!*config.dry_run());
        assert_eq!(*config.verbosity(), 0);
        assert_eq!(*config.log_format(), LogFormat::Text);
    }

    #[test]
    fn test_repeated_flags_accumulate() {
        let config = parse(&["-v", "--verbose", "-v", "-d", "/a", "--dir", "/b", "-n"]).unwrap();

        assert_eq!(*config.verbosity(), 3);
        assert!(*config.dry_run());
        assert_eq!(
            config.directories(),
            &vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn test_combined_short_flags() {
        let config = parse(&["-nvv"]).unwrap();

        assert!(*config.dry_run());
        assert_eq!(*config.verbosity(), 2);
    }

    #[test]
    fn test_explicit_dir_replaces_default() {
        let config = parse(&["-d", "/only"]).unwrap();
        assert_eq!(config.directories(), &vec![PathBuf::from("/only")]);
    }

    #[test]
    fn test_json_log_format() {
        let config = parse(&["--log-format", "json"]).unwrap();
        assert_eq!(*config.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let err = parse(&["--log-format", "xml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = parse(&["--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = parse(&["-d", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        assert!(parse(&["-d"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
