//! Log sink setup for the CLI.
//!
//! Reports are log output: the console layer writes to stdout, and
//! `--log-file` adds a second, uncolored layer writing to a file. When stdout
//! carries JSON instead, console logs move to stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

/// Log level for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Reports and progress
    Info,
    /// Report details
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Level implied by `-v` repetitions.
    pub fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => Self::Info,
            1 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn as_filter(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init(level: LogLevel, log_file: Option<&Path>, console_to_stderr: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let console_writer = if console_to_stderr {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(console_writer))
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(())
}
