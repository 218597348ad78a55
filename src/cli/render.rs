//! Render the template with placeholder substitutions.
//!
//! Rendering replaces placeholder symbols (`function_under_test`,
//! `DomainEntity`, ...) with the author's own names. Placeholders left
//! unbound keep their original names, so `testplate render` with no flags
//! reproduces the document verbatim.
//!
//! ```bash
//! testplate render --set function_under_test=parse_header
//! testplate render --set DomainEntity=Invoice --section entity
//! testplate render --set ServiceClass=billing.InvoiceService -o tests/test_billing.py
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::common::{TemplateSource, build_render_context};
use crate::core::TemplateError;
use crate::templating::TemplateRenderer;

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Placeholder substitution in PLACEHOLDER=NAME form (repeatable)
    #[arg(long = "set", value_name = "PLACEHOLDER=NAME")]
    set: Vec<String>,

    /// Limit output to one section (short name, title, or class name)
    #[arg(short, long)]
    section: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    force: bool,
}

impl RenderCommand {
    /// Execute the command against the selected template source.
    pub async fn execute(self, source: TemplateSource) -> Result<()> {
        let (doc, config) = source.load().await?;
        let ctx = build_render_context(&doc, &config, &self.set)?;

        let renderer = TemplateRenderer::new();
        let rendered = match &self.section {
            Some(name) => renderer.render_section(&doc, &ctx, name)?,
            None => renderer.render(&doc, &ctx)?,
        };

        match &self.output {
            Some(path) => {
                if path.exists() && !self.force {
                    return Err(TemplateError::FileExists {
                        path: path.display().to_string(),
                    }
                    .into());
                }
                tokio::fs::write(path, &rendered).await.map_err(|_| {
                    TemplateError::FileSystemError {
                        operation: "write rendered template".to_string(),
                        path: path.display().to_string(),
                    }
                })?;
                println!("{} {}", "Rendered".green().bold(), path.display());
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }
}
