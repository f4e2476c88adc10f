//! # ember2D headless runtime
//!
//! Loads a scene and steps it for a fixed number of ticks without a window.
//!
//! ```text
//! ember2d-runtime [config.toml]
//! ```
//!
//! Without a config file the built-in demo scene runs with default settings.
//! `RUST_LOG` overrides the configured log filter.

mod config;
mod error;
mod host;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use config::RuntimeConfig;
use error::RuntimeError;
use host::Host;

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match RuntimeConfig::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("ember2d-runtime: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => RuntimeConfig::default(),
    };

    init_logging(&config.log_filter);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(config: &RuntimeConfig) -> Result<(), RuntimeError> {
    let mut host = Host::from_config(config)?;
    tracing::info!(
        scene = ?config.scene,
        ticks = config.ticks,
        entities = host.simulation().world.registry.count(),
        "starting ember2D runtime"
    );

    let report = host.run(config.ticks);

    tracing::info!(
        ticks = report.ticks,
        events = report.events_processed,
        fired = report.rules_fired,
        alive = host.simulation().world.registry.count(),
        "simulation finished"
    );
    Ok(())
}
