//! Structure Validator CLI
//!
//! A command-line tool for validating project folder structure and file
//! naming conventions.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::config::{ConfigError, ExitCode, ValidatedConfig, write_init_config};
use cli::output::{HumanOutput, write_json};
use cli::{Args, CheckArgs, Command};
use structure_validator_core::ProjectValidator;
use structure_validator_core::config::{ConfigSource, PRESETS};

#[tokio::main]
async fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json_output());

    // Set up signal handling for graceful shutdown
    let terminated = Arc::new(AtomicBool::new(false));
    let terminated_clone = terminated.clone();

    tokio::spawn(async move {
        let ctrl_c = signal::ctrl_c();
        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };
        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received SIGINT, shutting down...");
            }
            _ = terminate => {
                info!("Received SIGTERM, shutting down...");
            }
        }

        terminated_clone.store(true, Ordering::SeqCst);
    });

    // Run the command
    let exit_code = run(args, &terminated);

    // Check if we were terminated by signal
    if terminated.load(Ordering::SeqCst) {
        return StdExitCode::from(ExitCode::Terminated as u8);
    }

    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Dispatch to the selected subcommand.
fn run(args: Args, terminated: &AtomicBool) -> ExitCode {
    match args.command {
        Command::Check(check) => run_check(&check, terminated),
        Command::Init { preset } => run_init(&preset),
        Command::Presets => run_presets(),
    }
}

/// Validate the project and report the results.
fn run_check(args: &CheckArgs, terminated: &AtomicBool) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let use_colors = !args.json && io::stdout().is_terminal();

    // Validate configuration
    let config = match ValidatedConfig::from_args(args) {
        Ok(config) => config,
        Err(ConfigError::Problems(problems)) => {
            let mut output = HumanOutput::new(io::stderr().lock(), use_colors);
            if let Err(e) = output.write_config_errors(&problems) {
                error!("Failed to write output: {}", e);
            }
            return ExitCode::StartupFailure;
        }
        Err(e) => {
            write_error(&e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    debug!("Validated configuration: {:?}", config);
    info!("Project root: {}", config.root.display());
    match &config.source {
        ConfigSource::File(path) => info!("Configuration file: {}", path.display()),
        ConfigSource::DefaultPreset => info!("No configuration file found, using default preset"),
    }

    // Check for termination
    if terminated.load(Ordering::SeqCst) {
        return ExitCode::Terminated;
    }

    let mut validator = ProjectValidator::new(config.rule_config.clone(), &config.root);
    let result = match validator.validate() {
        Ok(result) => result,
        Err(e) => {
            write_error(&e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    debug!(
        "Validation found {} error(s) and {} warning(s)",
        result.errors.len(),
        result.warnings.len()
    );

    // Output results
    if config.json_output {
        if let Err(e) = write_json(&mut stdout, &result) {
            error!("Failed to write JSON output: {}", e);
            return ExitCode::StartupFailure;
        }
    } else {
        let mut output = HumanOutput::new(&mut stdout, use_colors);
        if let Err(e) = output.write_report(&result) {
            error!("Failed to write output: {}", e);
            return ExitCode::StartupFailure;
        }
    }

    // Determine exit code
    config.exit_code_for_result(&result)
}

/// Write a starter configuration file into the current directory.
fn run_init(preset: &str) -> ExitCode {
    let use_colors = io::stdout().is_terminal();

    let dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            write_error(&format!("cannot determine current directory: {}", e), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    match write_init_config(&dir, preset) {
        Ok(path) => {
            let mut output = HumanOutput::new(io::stdout().lock(), use_colors);
            let written = output
                .write_info(&format!("Configuration file created at: {}", path.display()))
                .and_then(|()| output.write_info(&format!("Using preset: {}", preset)));
            if let Err(e) = written {
                error!("Failed to write output: {}", e);
            }
            ExitCode::Success
        }
        Err(e) => {
            write_error(&e.to_string(), use_colors);
            ExitCode::StartupFailure
        }
    }
}

/// List the built-in presets.
fn run_presets() -> ExitCode {
    let use_colors = io::stdout().is_terminal();
    let mut output = HumanOutput::new(io::stdout().lock(), use_colors);
    match output.write_presets(PRESETS) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            error!("Failed to write output: {}", e);
            ExitCode::StartupFailure
        }
    }
}

/// Write an error message to stderr.
fn write_error(message: &str, use_colors: bool) {
    let mut output = HumanOutput::new(io::stderr().lock(), use_colors);
    if let Err(e) = output.write_error(message) {
        error!("Failed to write error: {}", e);
    }
}
