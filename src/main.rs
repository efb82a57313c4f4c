// No console window when launched by a scheduler on Windows; output goes to the log file.
#![cfg_attr(windows, windows_subsystem = "windows")]

// Standard library
use std::path::PathBuf;
use std::process::ExitCode;

// 3rd party crates
use tracing::{error, info, warn};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod functions;
mod health;
mod matcher;
mod resolver;
mod service;
mod settings;
mod utility;

// Project imports
use crate::functions::run;
use crate::health::RunReport;
use crate::settings::constants::default_log_level;
use crate::settings::{ConfigLoad, ConfigManager};
use crate::utility::log_sink::{default_log_path, LogSink};
use crate::utility::runtime::{block_on_bounded, RUNTIME_SHUTDOWN_TIMEOUT};

/// Main entry point for the DNS health checker.
/// Resolves a host name, compares it with the expected address and restarts
/// the configured service once if they disagree, then verifies the result.
///
/// Every event is written to an append-only log file. The process exits
/// normally whatever the outcome unless `check.strict_exit` is enabled;
/// repeating the check is left to an external scheduler.
fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let ConfigLoad {
        created_default,
        manager,
    } = ConfigManager::load();

    let log_path: PathBuf = match &manager {
        Ok(manager) => manager.get_settings().get_log_file(),
        Err(_) => default_log_path(),
    };

    // Without a log target there is nowhere to report anything.
    let sink: LogSink = match LogSink::open(&log_path) {
        Ok(sink) => sink,
        Err(_) => return ExitCode::SUCCESS,
    };

    // setup logging.
    let log_level: String = match &manager {
        Ok(manager) => manager.get_settings().get_log_level(),
        Err(_) => default_log_level(),
    };

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(log_level);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false)
        .with_writer(sink.into_writer())
        .finish();

    // Held until main returns so the log file is released on every path.
    let _log_guard = tracing::subscriber::set_default(subscriber);

    if let Some(path) = created_default {
        warn!(
            "Default configuration file created at {:?}, set the check target before the next run",
            path
        );
    }

    let manager: ConfigManager = match manager {
        Ok(manager) => manager,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    info!(
        "⚙️ Settings have been loaded from {:?}.",
        manager.config_path
    );

    let report: RunReport =
        match block_on_bounded(run(manager.get_settings()), RUNTIME_SHUTDOWN_TIMEOUT) {
            Ok(report) => report,
            Err(e) => {
                error!("Failed to start the async runtime: {}", e);
                return ExitCode::FAILURE;
            }
        };

    if manager.get_settings().is_strict_exit() && !report.outcome.is_success() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
