//! Structural validation of a template document.
//!
//! The document is static text, so the only verifiable properties are
//! structural:
//!
//! 1. all four named sections are present and non-empty
//! 2. retrieving the document twice yields byte-identical content
//! 3. no placeholder symbol is defined anywhere in the document
//! 4. the text passes the Python syntax smoke check
//!
//! Each failed property becomes a [`ValidationIssue`]; an empty issue list
//! means the document fulfills the template contract.

use crate::template::TemplateDocument;
use crate::template::section::SectionKind;
use crate::template::syntax;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// The structural property a [`ValidationIssue`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    /// Four named sections, each present and non-empty.
    Sections,
    /// Byte-identical content across retrievals.
    Idempotence,
    /// Placeholder symbols stay undefined.
    Placeholders,
    /// The text parses as example syntax.
    Syntax,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sections => "sections",
            Self::Idempotence => "idempotence",
            Self::Placeholders => "placeholders",
            Self::Syntax => "syntax",
        };
        write!(f, "{name}")
    }
}

/// One violated structural property.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Which property the issue violates.
    pub property: Property,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn new(property: Property, message: impl Into<String>) -> Self {
        Self {
            property,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.property, self.message)
    }
}

/// Check every structural property of `doc`.
///
/// `retrieved_again` is a second, independent retrieval of the same source,
/// used for the idempotence property. Returns an empty vector when the
/// document fulfills the contract.
#[must_use]
pub fn check(doc: &TemplateDocument, retrieved_again: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_sections(doc, &mut issues);

    if doc.text() != retrieved_again {
        issues.push(ValidationIssue::new(
            Property::Idempotence,
            "re-reading the document produced different content",
        ));
    }

    check_placeholders(doc, &mut issues);

    for issue in syntax::check(doc.text()) {
        issues.push(ValidationIssue::new(Property::Syntax, issue.to_string()));
    }

    issues
}

/// Property 1: exactly the four named sections, each present and non-empty.
fn check_sections(doc: &TemplateDocument, issues: &mut Vec<ValidationIssue>) {
    if doc.sections().len() != SectionKind::ALL.len() {
        issues.push(ValidationIssue::new(
            Property::Sections,
            format!(
                "expected {} sections, found {}",
                SectionKind::ALL.len(),
                doc.sections().len()
            ),
        ));
    }

    for kind in SectionKind::ALL {
        let matching: Vec<_> = doc.sections().iter().filter(|s| s.kind == kind).collect();
        match matching.as_slice() {
            [] => issues.push(ValidationIssue::new(
                Property::Sections,
                format!("section '{}' is missing", kind.title()),
            )),
            [section] => {
                if section.is_empty() {
                    issues.push(ValidationIssue::new(
                        Property::Sections,
                        format!("section '{}' is empty", kind.title()),
                    ));
                }
            }
            many => issues.push(ValidationIssue::new(
                Property::Sections,
                format!("section '{}' appears {} times", kind.title(), many.len()),
            )),
        }
    }
}

/// Property 3: placeholder symbols must not be defined in the document.
///
/// The placeholder set is *derived* as "referenced but unbound", so this
/// check runs an independent pass: for each placeholder it looks for a
/// `def`/`class` declaration or assignment of that exact name. A hit means
/// the analysis and the document disagree, i.e. a supposedly illustrative
/// symbol has a real definition. A document with no placeholders at all
/// vacuously satisfies the property.
fn check_placeholders(doc: &TemplateDocument, issues: &mut Vec<ValidationIssue>) {
    for name in doc.placeholders() {
        let pattern = format!(r"(?m)^\s*(?:(?:class|def)\s+{name}\b|{name}\s*=[^=])");
        let defined = Regex::new(&pattern).is_ok_and(|re| re.is_match(doc.text()));
        if defined {
            issues.push(ValidationIssue::new(
                Property::Placeholders,
                format!("placeholder symbol '{name}' is defined in the document"),
            ));
        }
    }
}
