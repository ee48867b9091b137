use std::io;
use std::process::ExitCode;

use catalog_app::logging::{self, LogDestination};
use catalog_app::{run_command, AppConfig, Cli};
use catalog_logging::catalog_error;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_env(|key| std::env::var(key).ok()),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    if let Some(url) = cli.api_url.clone() {
        config.api_url = url;
    }
    if let Some(path) = cli.log_file.clone() {
        config.log_file = Some(path);
    }

    let destination = match config.log_file.as_deref() {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    logging::initialize(destination, config.level());

    let settings = match config.api_settings() {
        Ok(settings) => settings,
        Err(err) => {
            catalog_error!("{}", err);
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    match run_command(cli.command, settings, &mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            catalog_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
