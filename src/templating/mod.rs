//! Tera-based rendering of the template document.
//!
//! Rendering turns the scaffolding into a starting point for a real test
//! file: each placeholder symbol becomes a Tera variable, bound to the
//! author's replacement name when one was given and to the original
//! placeholder name otherwise. An empty render context therefore reproduces
//! the document byte-for-byte, which keeps the provider's verbatim guarantee
//! testable against the renderer.
//!
//! Substitution values must be Python dotted names (`parse_header`,
//! `billing.InvoiceService`), so a rendered document has the same line
//! structure as its source. Section line spans remain valid after rendering,
//! which is how [`TemplateRenderer::render_section`] slices a single section
//! out of the rendered text.

use crate::core::TemplateError;
use crate::template::TemplateDocument;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DOTTED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]\w*(?:\.[A-Za-z_]\w*)*$").unwrap());

/// Author-supplied placeholder substitutions.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    substitutions: BTreeMap<String, String>,
}

impl RenderContext {
    /// An empty context; rendering with it reproduces the document verbatim.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from `PLACEHOLDER=NAME` pairs, validated against the
    /// document's placeholder set.
    pub fn from_pairs<I, S>(doc: &TemplateDocument, pairs: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ctx = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, value) =
                pair.split_once('=').ok_or_else(|| TemplateError::InvalidSubstitution {
                    value: pair.to_string(),
                    reason: "missing '='".to_string(),
                })?;
            ctx.set(doc, name.trim(), value.trim())?;
        }
        Ok(ctx)
    }

    /// Bind one placeholder to a replacement name.
    pub fn set(
        &mut self,
        doc: &TemplateDocument,
        name: &str,
        value: &str,
    ) -> Result<(), TemplateError> {
        if !doc.placeholders().contains(name) {
            return Err(TemplateError::UnknownPlaceholder {
                name: name.to_string(),
                available: doc.placeholders().iter().cloned().collect::<Vec<_>>().join(", "),
            });
        }

        if !DOTTED_NAME.is_match(value) {
            return Err(TemplateError::InvalidSubstitution {
                value: format!("{name}={value}"),
                reason: "replacement is not a Python dotted name".to_string(),
            });
        }

        self.substitutions.insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Whether any substitution is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// The bound substitutions, sorted by placeholder name.
    #[must_use]
    pub fn substitutions(&self) -> &BTreeMap<String, String> {
        &self.substitutions
    }
}

/// Renders template documents with placeholder substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render the full document with the given substitutions.
    pub fn render(
        &self,
        doc: &TemplateDocument,
        ctx: &RenderContext,
    ) -> Result<String, TemplateError> {
        let source = to_tera_source(doc)?;

        let mut context = tera::Context::new();
        for placeholder in doc.placeholders() {
            let value = ctx.substitutions.get(placeholder).unwrap_or(placeholder);
            context.insert(placeholder, value);
        }

        tracing::debug!(
            substitutions = ctx.substitutions.len(),
            source = doc.source(),
            "rendering template document"
        );

        tera::Tera::one_off(&source, &context, false).map_err(|e| TemplateError::RenderError {
            reason: e.to_string(),
        })
    }

    /// Render the document and slice out one section by name.
    pub fn render_section(
        &self,
        doc: &TemplateDocument,
        ctx: &RenderContext,
        name: &str,
    ) -> Result<String, TemplateError> {
        let section = doc.section(name)?;
        let rendered = self.render(doc, ctx)?;

        // Substitution values never contain newlines, so the section's line
        // span is valid in the rendered text as well
        let lines: Vec<&str> = rendered
            .lines()
            .skip(section.start_line - 1)
            .take(section.end_line - section.start_line + 1)
            .collect();

        Ok(format!("{}\n", lines.join("\n")))
    }
}

/// Turn the document text into a Tera source by replacing each placeholder
/// occurrence with a `{{ placeholder }}` variable.
///
/// Documents containing Tera delimiters of their own cannot be rendered this
/// way and are rejected; the built-in template has none.
fn to_tera_source(doc: &TemplateDocument) -> Result<String, TemplateError> {
    let text = doc.text();
    if text.contains("{{") || text.contains("{%") || text.contains("{#") {
        return Err(TemplateError::RenderError {
            reason: "template text contains Tera delimiters and cannot be rendered".to_string(),
        });
    }

    let mut source = text.to_string();
    for placeholder in doc.placeholders() {
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(placeholder))).map_err(|e| {
            TemplateError::RenderError {
                reason: e.to_string(),
            }
        })?;
        source = pattern
            .replace_all(&source, format!("{{{{ {placeholder} }}}}").as_str())
            .into_owned();
    }

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_renders_verbatim() {
        let doc = TemplateDocument::builtin();
        let rendered = TemplateRenderer::new().render(&doc, &RenderContext::new()).unwrap();
        assert_eq!(rendered, doc.text());
    }

    #[test]
    fn test_substitution_replaces_all_occurrences() {
        let doc = TemplateDocument::builtin();
        let mut ctx = RenderContext::new();
        ctx.set(&doc, "function_under_test", "parse_header").unwrap();

        let rendered = TemplateRenderer::new().render(&doc, &ctx).unwrap();
        assert!(!rendered.contains("= function_under_test("));
        assert!(rendered.contains("parse_header(input_data)"));
        assert!(rendered.contains("parse_header(invalid_input)"));
        // The async placeholder shares a suffix but must stay untouched
        assert!(rendered.contains("async_function_under_test"));
    }

    #[test]
    fn test_unknown_placeholder_rejected() {
        let doc = TemplateDocument::builtin();
        let mut ctx = RenderContext::new();
        let err = ctx.set(&doc, "not_a_placeholder", "value").unwrap_err();
        assert!(matches!(err, TemplateError::UnknownPlaceholder { .. }));
    }

    #[test]
    fn test_invalid_replacement_rejected() {
        let doc = TemplateDocument::builtin();
        let mut ctx = RenderContext::new();
        let err = ctx.set(&doc, "function_under_test", "not an ident").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidSubstitution { .. }));
    }

    #[test]
    fn test_dotted_replacement_allowed() {
        let doc = TemplateDocument::builtin();
        let mut ctx = RenderContext::new();
        ctx.set(&doc, "ServiceClass", "billing.InvoiceService").unwrap();

        let rendered = TemplateRenderer::new().render(&doc, &ctx).unwrap();
        assert!(rendered.contains("billing.InvoiceService(database=mock_database)"));
    }

    #[test]
    fn test_from_pairs_parses_and_validates() {
        let doc = TemplateDocument::builtin();
        let ctx = RenderContext::from_pairs(&doc, ["DomainEntity=Invoice"]).unwrap();
        assert_eq!(ctx.substitutions().get("DomainEntity").map(String::as_str), Some("Invoice"));

        let err = RenderContext::from_pairs(&doc, ["missing-equals"]).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidSubstitution { .. }));
    }

    #[test]
    fn test_render_section_slices_one_section() {
        let doc = TemplateDocument::builtin();
        let rendered = TemplateRenderer::new()
            .render_section(&doc, &RenderContext::new(), "async")
            .unwrap();

        assert!(rendered.starts_with("class TestAsyncOperations:"));
        assert!(!rendered.contains("class TestDomainEntity"));
        assert_eq!(rendered, doc.section("async").unwrap().text);
    }
}
