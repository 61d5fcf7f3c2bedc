mod app;
mod cli;
mod config;
mod errors;
mod service;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use utils::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse errors exit with 1 rather than clap's usual 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let config = cli.into_config();

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = app::run(&config).await {
        tracing::error!(kind = %e.kind(), error = %e, "run failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
