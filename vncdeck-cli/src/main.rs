//! `VncDeck` CLI - Command-line interface for the `VncDeck` connection manager
//!
//! Provides commands for listing, adding, updating and deleting VNC
//! connections, launching the viewer and inspecting the viewer install.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use vncdeck_core::tracing::{TracingConfig, TracingLevel, TracingOutput, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    init_logging(&cli);

    let result = commands::dispatch(config_path, cli.viewer.as_deref(), cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

/// `-q` wins, then `-v` counts, then the `logging.level` setting
fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        TracingLevel::Error
    } else {
        TracingLevel::from_verbosity(cli.verbose, util::configured_log_level(cli.config.as_deref()))
    };

    let output = cli
        .log_file
        .clone()
        .map_or(TracingOutput::Stderr, TracingOutput::File);

    let config = TracingConfig::new()
        .with_level(level)
        .with_output(output)
        .with_target(cli.verbose > 1);

    if let Err(e) = init_tracing(&config) {
        eprintln!("Warning: {e}");
    }
}
