use clap::Parser;
use hueshift::app::{App, init_config};
use hueshift::cli::{Cli, Command};
use hueshift::config::{self, LoggingConfig};
use hueshift::error::{AppError, report_error};
use hueshift::logger::setup_logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // `init` must work before any config file exists
    if let Command::Init { dir } = &cli.command {
        if let Err(e) = setup_logger(&LoggingConfig::default()) {
            eprintln!("Failed to initialize logger: {e}");
        }
        let mut stdout = std::io::stdout().lock();
        return match init_config(dir.as_deref(), &mut stdout) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => fail(&e, "init"),
        };
    }

    let app_config = match config::load_config(cli.config.as_deref()).into_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = setup_logger(app_config.logging()) {
        eprintln!("Failed to initialize logger: {e}");
    }
    log::debug!("Running {:?}", cli.command);

    let mut app = match App::from_config(&app_config) {
        Ok(app) => app,
        Err(e) => return fail(&e, "startup"),
    };

    let mut stdout = std::io::stdout().lock();
    match app.run(&cli.command, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e, "command"),
    }
}

fn fail(error: &AppError, operation: &str) -> ExitCode {
    eprintln!("{}", report_error(error, operation));
    ExitCode::FAILURE
}
