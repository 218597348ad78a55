//! List the sections of the template document.
//!
//! Shows each section's title, class name, line span, and how many example
//! tests it contains. Output formats follow the usual conventions:
//!
//! ```bash
//! testplate list                   # aligned table
//! testplate list --format json     # machine-readable
//! testplate list --format compact  # one line per section
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::cli::common::TemplateSource;
use crate::template::Section;

/// Output format for `list`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    /// Aligned table with headers
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// One line per section
    Compact,
}

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: ListFormat,
}

/// One row of list output.
#[derive(Serialize)]
struct SectionRow<'a> {
    kind: &'a str,
    title: &'a str,
    #[serde(rename = "class")]
    class_name: &'a str,
    start_line: usize,
    end_line: usize,
    tests: usize,
}

impl<'a> SectionRow<'a> {
    fn from_section(section: &'a Section) -> Self {
        Self {
            kind: section.kind.short_name(),
            title: &section.title,
            class_name: &section.class_name,
            start_line: section.start_line,
            end_line: section.end_line,
            tests: count_tests(&section.text),
        }
    }
}

/// Number of example test functions in a section body.
fn count_tests(text: &str) -> usize {
    text.lines()
        .map(|line| line.trim_start().trim_start_matches("async "))
        .filter(|line| line.starts_with("def test_"))
        .count()
}

impl ListCommand {
    /// Execute the command against the selected template source.
    pub async fn execute(self, source: TemplateSource) -> Result<()> {
        let (doc, _config) = source.load().await?;
        let rows: Vec<SectionRow<'_>> =
            doc.sections().iter().map(SectionRow::from_section).collect();

        match self.format {
            ListFormat::Table => print_table(&rows),
            ListFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            ListFormat::Compact => {
                for row in &rows {
                    println!(
                        "{} ({}) {}-{}",
                        row.title, row.class_name, row.start_line, row.end_line
                    );
                }
            }
        }

        Ok(())
    }
}

fn print_table(rows: &[SectionRow<'_>]) {
    print!("{}", render_table(rows));
}

fn render_table(rows: &[SectionRow<'_>]) -> String {
    let title_width =
        rows.iter().map(|r| r.title.len()).max().unwrap_or(0).max("TITLE".len());
    let class_width =
        rows.iter().map(|r| r.class_name.len()).max().unwrap_or(0).max("CLASS".len());

    // Pad before colorizing: ANSI escape bytes would count toward the width
    let mut out = format!(
        "{}  {}  {}  {}\n",
        format!("{:<title_width$}", "TITLE").bold(),
        format!("{:<class_width$}", "CLASS").bold(),
        format!("{:>9}", "LINES").bold(),
        format!("{:>5}", "TESTS").bold()
    );

    for row in rows {
        out.push_str(&format!(
            "{:<title_width$}  {:<class_width$}  {:>4}-{:>4}  {:>5}\n",
            row.title, row.class_name, row.start_line, row.end_line, row.tests
        ));
    }

    out
}
