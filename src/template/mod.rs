//! The template provider: the document model over the scaffolding text.
//!
//! A [`TemplateDocument`] holds the full example text verbatim plus a
//! structural view derived from it: the ordered [`Section`]s (recognized by
//! top-level Python `class` declarations) and the placeholder symbol set
//! (identifiers referenced but never defined). The text is immutable once
//! loaded; retrieval returns the same bytes every time.
//!
//! The built-in document is embedded at compile time from
//! `templates/pytest-unit.template.py` and covers four sections:
//! basic behavior tests, dependency-mocked tests, async operation tests, and
//! domain entity tests. Custom templates load through
//! [`TemplateDocument::from_file`] and are structured the same way.
//!
//! # Example
//!
//! ```rust
//! use testplate_cli::template::TemplateDocument;
//!
//! let doc = TemplateDocument::builtin();
//! assert_eq!(doc.sections().len(), 4);
//! assert!(doc.placeholders().contains("function_under_test"));
//! ```

pub mod placeholders;
pub mod section;
pub mod syntax;
pub mod validate;

pub use placeholders::PlaceholderAnalysis;
pub use section::{Section, SectionKind};
pub use validate::{Property, ValidationIssue};

use crate::core::TemplateError;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

/// The embedded template document, byte-for-byte.
const BUILTIN_TEMPLATE: &str = include_str!("../../templates/pytest-unit.template.py");

/// Source label used for the embedded document.
pub const BUILTIN_SOURCE: &str = "builtin";

static TOP_LEVEL_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^class\s+([A-Za-z_]\w*)").unwrap());

/// An immutable template document with its derived structural view.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    text: String,
    source: String,
    sections: Vec<Section>,
    analysis: PlaceholderAnalysis,
}

impl TemplateDocument {
    /// Load the embedded document.
    ///
    /// The built-in template is known to be section-structured, so this
    /// never fails.
    #[must_use]
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_TEMPLATE, BUILTIN_SOURCE)
            .expect("embedded template is section-structured")
    }

    /// Load a custom template document from a file.
    pub async fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TemplateError::TemplateFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                TemplateError::IoError(e)
            }
        })?;

        Self::parse(&text, &path.display().to_string())
    }

    /// Structure `text` into a document.
    ///
    /// Sections are recognized by top-level `class` declarations; a text
    /// without any cannot be structured and is rejected. `source` is a label
    /// for error messages (a path, or [`BUILTIN_SOURCE`]).
    pub fn parse(text: &str, source: &str) -> Result<Self, TemplateError> {
        let sections = split_sections(text);
        if sections.is_empty() {
            return Err(TemplateError::TemplateParseError {
                file: source.to_string(),
                reason: "no top-level class declarations found".to_string(),
            });
        }

        let analysis = placeholders::analyze(text);
        tracing::debug!(
            source,
            sections = sections.len(),
            placeholders = analysis.placeholders.len(),
            "parsed template document"
        );

        Ok(Self {
            text: text.to_string(),
            source: source.to_string(),
            sections,
            analysis,
        })
    }

    /// The full example text, verbatim. Byte-identical across calls.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the document came from: a path, or [`BUILTIN_SOURCE`].
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The ordered sections of the document.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by short name, title, or class name.
    pub fn section(&self, name: &str) -> Result<&Section, TemplateError> {
        self.sections.iter().find(|s| s.matches(name)).ok_or_else(|| {
            TemplateError::SectionNotFound {
                name: name.to_string(),
                available: self
                    .sections
                    .iter()
                    .map(|s| s.kind.short_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
    }

    /// The placeholder symbols of the document, sorted.
    #[must_use]
    pub fn placeholders(&self) -> &BTreeSet<String> {
        &self.analysis.placeholders
    }

    /// The full symbol analysis (placeholders plus bound names).
    #[must_use]
    pub fn analysis(&self) -> &PlaceholderAnalysis {
        &self.analysis
    }
}

/// Split `text` into sections at top-level `class` declarations.
fn split_sections(text: &str) -> Vec<Section> {
    // Byte offset and 1-based line number of each top-level class header
    let mut starts: Vec<(usize, usize, String)> = Vec::new();
    let mut offset = 0usize;

    for (idx, line) in text.lines().enumerate() {
        if let Some(cap) = TOP_LEVEL_CLASS.captures(line) {
            starts.push((offset, idx + 1, cap[1].to_string()));
        }
        offset += line.len() + 1;
    }

    let total_lines = text.lines().count();
    let mut sections = Vec::with_capacity(starts.len());

    for (i, (start_offset, start_line, class_name)) in starts.iter().enumerate() {
        let (end_offset, next_line) = match starts.get(i + 1) {
            Some((next_offset, next_start, _)) => (*next_offset, *next_start),
            None => (text.len(), total_lines + 1),
        };

        let raw = &text[*start_offset..end_offset];
        // Trailing blank separator lines belong to the document, not the section
        let trimmed = raw.trim_end_matches(|c| c == '\n' || c == ' ');
        let blank_tail = raw[trimmed.len()..].matches('\n').count();
        let end_line = (next_line - 1).saturating_sub(blank_tail.saturating_sub(1));

        let kind = SectionKind::classify(class_name);
        sections.push(Section {
            kind,
            title: kind.title().to_string(),
            class_name: class_name.clone(),
            start_line: *start_line,
            end_line,
            text: format!("{trimmed}\n"),
        });
    }

    sections
}
