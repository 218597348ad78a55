//! Shared plumbing for CLI commands.
//!
//! Every subcommand needs the same two things: the template document
//! (built-in or custom) and the global configuration. [`TemplateSource`]
//! bundles the flags that decide where those come from.

use crate::config::Config;
use crate::core::TemplateError;
use crate::template::{BUILTIN_SOURCE, TemplateDocument};
use crate::templating::RenderContext;
use anyhow::Result;
use std::path::PathBuf;

/// Where the template document and configuration come from.
///
/// Precedence for the document: `--template` flag, then the config file's
/// `template` key, then the built-in template.
#[derive(Debug, Clone, Default)]
pub struct TemplateSource {
    /// Explicit config path from `--config` / `TESTPLATE_CONFIG`.
    pub config_path: Option<PathBuf>,
    /// Explicit template path from `--template`.
    pub template_override: Option<PathBuf>,
}

impl TemplateSource {
    /// Load the configuration and the template document it selects.
    pub async fn load(&self) -> Result<(TemplateDocument, Config)> {
        let config = Config::load(self.config_path.as_deref()).await?;

        let template_path =
            self.template_override.clone().or_else(|| config.template_path());

        let doc = match template_path {
            Some(path) => TemplateDocument::from_file(&path).await?,
            None => TemplateDocument::builtin(),
        };

        Ok((doc, config))
    }
}

/// Retrieve the document's source text a second time, for the idempotence
/// property of `validate`.
pub async fn retrieve_again(doc: &TemplateDocument) -> Result<String> {
    if doc.source() == BUILTIN_SOURCE {
        Ok(TemplateDocument::builtin().text().to_string())
    } else {
        Ok(tokio::fs::read_to_string(doc.source()).await.map_err(TemplateError::IoError)?)
    }
}

/// Build a render context from config defaults plus `--set` pairs.
///
/// Config defaults naming placeholders the document doesn't have are skipped
/// with a warning (the config may target the built-in template while a
/// custom one is in use); `--set` pairs are validated strictly.
pub fn build_render_context(
    doc: &TemplateDocument,
    config: &Config,
    sets: &[String],
) -> Result<RenderContext> {
    let mut ctx = RenderContext::new();

    for (name, value) in &config.placeholders {
        match ctx.set(doc, name, value) {
            Ok(()) => {}
            Err(TemplateError::UnknownPlaceholder {
                ..
            }) => {
                tracing::warn!(placeholder = %name, "config substitution does not match a placeholder, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    for pair in sets {
        let ctx_pairs = RenderContext::from_pairs(doc, [pair.as_str()])?;
        for (name, value) in ctx_pairs.substitutions() {
            ctx.set(doc, name, value)?;
        }
    }

    Ok(ctx)
}
