//! Validate the structural properties of the template document.
//!
//! The document is static text, so validation is structural: all four named
//! sections present and non-empty, retrieval idempotent, placeholder symbols
//! undefined, and the text passing the Python syntax smoke check. The
//! command exits non-zero when any property is violated, which makes it
//! suitable for CI over custom templates.
//!
//! ```bash
//! testplate validate
//! testplate --template my-scaffold.py validate --format json
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::cli::common::{TemplateSource, retrieve_again};
use crate::template::{ValidationIssue, validate};

/// Output format for `validate`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidateFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: ValidateFormat,
}

/// JSON report shape.
#[derive(Serialize)]
struct Report<'a> {
    valid: bool,
    source: &'a str,
    sections: usize,
    placeholders: usize,
    issues: &'a [ValidationIssue],
}

impl ValidateCommand {
    /// Execute the command against the selected template source.
    pub async fn execute(self, source: TemplateSource) -> Result<()> {
        let (doc, _config) = source.load().await?;
        let again = retrieve_again(&doc).await?;
        let issues = validate::check(&doc, &again);

        match self.format {
            ValidateFormat::Json => {
                let report = Report {
                    valid: issues.is_empty(),
                    source: doc.source(),
                    sections: doc.sections().len(),
                    placeholders: doc.placeholders().len(),
                    issues: &issues,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            ValidateFormat::Text => {
                if issues.is_empty() {
                    println!(
                        "{} template document is valid ({} sections, {} placeholders)",
                        "✓".green().bold(),
                        doc.sections().len(),
                        doc.placeholders().len()
                    );
                } else {
                    for issue in &issues {
                        println!("{} {}", "✗".red().bold(), issue);
                    }
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("template validation failed with {} issue(s)", issues.len())
        }
    }
}
