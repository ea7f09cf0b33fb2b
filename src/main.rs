//! Slotty CLI entry point.
//!
//! Parses arguments, runs the command, and turns failures into colored
//! messages with suggestions and a non-zero exit code.

use anyhow::Result;
use clap::Parser;
use slotty::cli;
use slotty::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
