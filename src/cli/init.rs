//! Copy the template into a project as a starting test file.
//!
//! `init` performs the workflow the template exists for: it renders the
//! scaffolding (with any configured or `--set` substitutions) and writes it
//! to `tests/test_example.py` under the target directory, ready for a human
//! author to edit into real tests.
//!
//! ```bash
//! testplate init
//! testplate init --dir my-project --set function_under_test=parse_header
//! testplate init --force   # overwrite an earlier scaffold
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::common::{TemplateSource, build_render_context};
use crate::core::TemplateError;
use crate::templating::TemplateRenderer;

/// File name written under `<dir>/tests/`.
const SCAFFOLD_FILE_NAME: &str = "test_example.py";

/// Arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Project directory to initialize (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Placeholder substitution in PLACEHOLDER=NAME form (repeatable)
    #[arg(long = "set", value_name = "PLACEHOLDER=NAME")]
    set: Vec<String>,

    /// Overwrite an existing scaffold file
    #[arg(long)]
    force: bool,
}

impl InitCommand {
    /// Execute the command against the selected template source.
    pub async fn execute(self, source: TemplateSource) -> Result<()> {
        let (doc, config) = source.load().await?;
        let ctx = build_render_context(&doc, &config, &self.set)?;
        let rendered = TemplateRenderer::new().render(&doc, &ctx)?;

        let tests_dir = self.dir.join("tests");
        let target = tests_dir.join(SCAFFOLD_FILE_NAME);

        if target.exists() && !self.force {
            return Err(TemplateError::FileExists {
                path: target.display().to_string(),
            }
            .into());
        }

        tokio::fs::create_dir_all(&tests_dir).await.map_err(|_| {
            TemplateError::FileSystemError {
                operation: "create tests directory".to_string(),
                path: tests_dir.display().to_string(),
            }
        })?;

        tokio::fs::write(&target, &rendered).await.map_err(|_| {
            TemplateError::FileSystemError {
                operation: "write scaffold file".to_string(),
                path: target.display().to_string(),
            }
        })?;

        tracing::info!(path = %target.display(), "wrote scaffold");
        println!("{} {}", "Initialized".green().bold(), target.display());
        println!("Edit the placeholder names into your real module and test names.");

        Ok(())
    }
}
