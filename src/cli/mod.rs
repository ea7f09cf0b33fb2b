//! Command-line interface for Slotty.
//!
//! # Available Commands
//!
//! - `render` - Render a page template into a layout, resolving slots and fills
//! - `check-name` - Check slot names against the naming rules
//!
//! # Examples
//!
//! ```bash
//! # Render a page into its layout and print the HTML
//! slotty render --templates ./templates --page pages/index.html --layout layout.html
//!
//! # Fail when a fill has no matching slot
//! slotty render --templates ./templates --page pages/index.html --layout layout.html --mode throw
//!
//! # Development markers and dev tools
//! slotty render --templates ./templates --page pages/index.html --environment development
//!
//! # Validate slot names
//! slotty check-name header nav:after 1st-column
//! ```
//!
//! # Global Options
//!
//! - `--config` - Path to a `slotty.toml` options file
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only report errors
//!
//! Logging goes to stderr so rendered HTML on stdout stays clean. Without
//! `--verbose` or `--quiet`, `RUST_LOG` is honored when set.

mod check_name;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::SlottyOptions;

pub use check_name::CheckNameCommand;
pub use render::RenderCommand;

/// Main CLI structure for Slotty.
#[derive(Parser, Debug)]
#[command(
    name = "slotty",
    about = "Slotty - Render templates with named slots and fills",
    version,
    long_about = "Slotty renders Tera pages into layouts. Pages fill named slots that \
                  layouts define, with :before/:after extensions and orphaned-fill validation."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to `RUST_LOG=debug`).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the options file.
    ///
    /// Missing files fall back to the defaults. `SLOTTY_VALIDATION_MODE`
    /// overrides the file's `validation_mode`.
    #[arg(short, long, global = true, default_value = "slotty.toml")]
    config: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a page template, optionally into a layout.
    ///
    /// See [`RenderCommand`] for options.
    Render(RenderCommand),

    /// Check slot names against the naming rules.
    ///
    /// Exits with an error if any name is invalid.
    CheckName(CheckNameCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes logging, resolves [`SlottyOptions`] from `--config` and
    /// the environment, then dispatches to the subcommand.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        match self.command {
            Commands::Render(cmd) => {
                let options = SlottyOptions::load_with_optional(Some(self.config)).await?;
                cmd.execute(options).await
            }
            Commands::CheckName(cmd) => cmd.execute(),
        }
    }

    /// The log filter directive implied by the flags, if any.
    #[must_use]
    pub fn log_level(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }

    fn init_logging(&self) {
        let filter = match self.log_level() {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}
