//! Print the template document verbatim.
//!
//! `show` is the retrieval operation of the template provider: it writes the
//! example text to stdout exactly as stored, with no rendering involved.
//! `--section` limits the output to one section.
//!
//! ```bash
//! testplate show
//! testplate show --section async
//! testplate show --section "domain entity tests" > tests/test_entity.py
//! ```

use anyhow::Result;
use clap::Args;

use crate::cli::common::TemplateSource;

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Limit output to one section (short name, title, or class name)
    #[arg(short, long)]
    section: Option<String>,
}

impl ShowCommand {
    /// Execute the command against the selected template source.
    pub async fn execute(self, source: TemplateSource) -> Result<()> {
        let (doc, _config) = source.load().await?;

        match &self.section {
            Some(name) => {
                let section = doc.section(name)?;
                print!("{}", section.text);
            }
            None => print!("{}", doc.text()),
        }

        Ok(())
    }
}
