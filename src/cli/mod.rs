//! cli
//!
//! Command-line interface layer for itgraph.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers load a graph document, call into
//! [`crate::core`] and [`crate::outline`], and print the result. Library
//! errors are wrapped with `anyhow` context here and nowhere else.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};

/// Execution context shared by all command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit config file (replaces the user config search).
    pub config_path: Option<PathBuf>,
    /// Project directory for `.itgraph.toml`; the current directory if unset.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Load configuration for this invocation, reporting warnings.
    pub fn load_config(&self) -> Result<Config> {
        let project_dir = match &self.cwd {
            Some(dir) => Some(dir.clone()),
            None => std::env::current_dir().ok(),
        };
        let result = Config::load(self.config_path.as_deref(), project_dir.as_deref())
            .context("Failed to load configuration")?;
        for warning in &result.warnings {
            output::warn(
                format!("{} ({})", warning.message, warning.path.display()),
                self.verbosity(),
            );
        }
        Ok(result.config)
    }
}

/// Install the global tracing subscriber.
///
/// `--debug` selects `debug`, `--quiet` selects `error`; otherwise
/// `RUST_LOG` is honored and defaults to `warn`. Logs go to stderr.
pub fn init_tracing(debug: bool, quiet: bool) {
    let filter = if debug {
        EnvFilter::new("itgraph=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug, cli.quiet);

    let ctx = Context {
        config_path: cli.config.clone(),
        cwd: None,
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
