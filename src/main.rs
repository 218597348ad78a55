//! testplate CLI entry point
//!
//! Handles command-line argument parsing, error display, and command
//! execution. The CLI supports:
//! - `show` - Print the template document verbatim
//! - `list` - List the document's sections
//! - `render` - Render with placeholder substitutions
//! - `validate` - Check the document's structural properties
//! - `init` - Copy the rendered scaffold into a project

use anyhow::Result;
use clap::Parser;
use testplate_cli::cli;
use testplate_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
