//! Command-line interface for testplate.
//!
//! Each command is implemented as a separate module with its own argument
//! structure and execution logic:
//!
//! - `show` - Print the template document verbatim
//! - `list` - List the document's sections
//! - `render` - Render with placeholder substitutions
//! - `validate` - Check the document's structural properties
//! - `init` - Copy the rendered scaffold into a project
//!
//! # Global Options
//!
//! All commands support:
//! - `--verbose` / `--quiet` - Output level (mutually exclusive)
//! - `--config` - Path to the config file (`TESTPLATE_CONFIG` also works)
//! - `--template` - Use a custom template file instead of the built-in one
//!
//! # Usage Patterns
//!
//! ```bash
//! # Inspect the scaffolding
//! testplate list
//! testplate show --section async
//!
//! # Start a test file with your own names
//! testplate render --set function_under_test=parse_header -o tests/test_parse.py
//!
//! # Check a custom template in CI
//! testplate --template scaffold.py validate --format json
//! ```

pub mod common;
mod init;
mod list;
mod render;
mod show;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use common::TemplateSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration for CLI execution.
///
/// Holds configuration that would otherwise be set as environment variables,
/// enabling dependency injection and better testability: tests and
/// programmatic callers can control behavior without mutating global state
/// during argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the `RUST_LOG` environment variable.
    ///
    /// When `None`, the existing `RUST_LOG` value is preserved.
    pub log_level: Option<String>,

    /// Custom path to the configuration file.
    ///
    /// When specified, sets the `TESTPLATE_CONFIG` environment variable to
    /// override the default location (`~/.testplate/config.toml`).
    pub config_path: Option<String>,
}

impl CliConfig {
    /// Create a new CLI configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this configuration to the process environment.
    ///
    /// Should be called exactly once at the start of CLI execution, before
    /// other threads exist.
    pub fn apply_to_env(&self) {
        if let Some(ref level) = self.log_level {
            // set_var is safe here: called once from the main thread at startup
            unsafe {
                std::env::set_var("RUST_LOG", level);
            }
        }

        if let Some(ref path) = self.config_path {
            unsafe {
                std::env::set_var("TESTPLATE_CONFIG", path);
            }
        }
    }
}

/// Main CLI application structure for testplate.
///
/// Handles global flags and delegates to subcommands for specific
/// operations. Global options are available to all subcommands.
#[derive(Parser)]
#[command(
    name = "testplate",
    about = "Test-scaffolding template provider",
    version,
    author,
    long_about = "testplate ships a pytest scaffolding template and lets you inspect, \
                  validate, render, and copy it into your project."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to setting `RUST_LOG=debug`. Mutually exclusive with
    /// `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors for automation.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file.
    ///
    /// Overrides the default location (`~/.testplate/config.toml`).
    #[arg(short, long, global = true, env = "TESTPLATE_CONFIG")]
    config: Option<PathBuf>,

    /// Use a custom template file instead of the built-in one.
    ///
    /// Takes precedence over the config file's `template` key.
    #[arg(short, long, global = true)]
    template: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the template document verbatim
    Show(show::ShowCommand),
    /// List the document's sections
    List(list::ListCommand),
    /// Render the template with placeholder substitutions
    Render(render::RenderCommand),
    /// Check the document's structural properties
    Validate(validate::ValidateCommand),
    /// Copy the rendered scaffold into a project
    Init(init::InitCommand),
}

impl Cli {
    /// Execute the parsed CLI command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Build a [`CliConfig`] from the parsed CLI arguments.
    ///
    /// - `--verbose` sets the log level to "debug"
    /// - `--quiet` limits logging to errors, overriding any ambient `RUST_LOG`
    /// - otherwise "info" is used
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.as_ref().map(|p| p.display().to_string()),
        }
    }

    /// Execute with a specific configuration, for dependency injection.
    ///
    /// Applies the configuration to the environment, installs the tracing
    /// subscriber, and dispatches to the subcommand.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply_to_env();

        if config.log_level.is_some() || std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .try_init();
        }

        let source = TemplateSource {
            config_path: self.config,
            template_override: self.template,
        };

        match self.command {
            Commands::Show(cmd) => cmd.execute(source).await,
            Commands::List(cmd) => cmd.execute(source).await,
            Commands::Render(cmd) => cmd.execute(source).await,
            Commands::Validate(cmd) => cmd.execute(source).await,
            Commands::Init(cmd) => cmd.execute(source).await,
        }
    }
}
