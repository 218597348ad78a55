//! Global configuration for testplate.
//!
//! Configuration is optional: without a config file the built-in template
//! and no default substitutions are used. The file lives at
//! `~/.testplate/config.toml` by default and can be overridden with the
//! `TESTPLATE_CONFIG` environment variable or the `--config` flag.
//!
//! # Format
//!
//! ```toml
//! # Use a custom template instead of the built-in one
//! template = "~/templates/pytest-unit.py"
//!
//! # Substitutions applied before any --set flags
//! [placeholders]
//! function_under_test = "parse_header"
//! DomainEntity = "Invoice"
//! ```

use crate::core::TemplateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The parsed global configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to a custom template file; `~` is expanded.
    pub template: Option<String>,

    /// Default placeholder substitutions, applied before `--set` flags.
    #[serde(default)]
    pub placeholders: BTreeMap<String, String>,
}

impl Config {
    /// Load the configuration.
    ///
    /// `explicit` is a path from `--config` or `TESTPLATE_CONFIG`; it must
    /// exist. Without one, the default location is tried and a missing file
    /// yields the default configuration.
    pub async fn load(explicit: Option<&Path>) -> Result<Self, TemplateError> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let config: Self = toml::from_str(&content).map_err(TemplateError::TomlError)?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if required {
                    Err(TemplateError::ConfigNotFound {
                        path: path.display().to_string(),
                    })
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
            Err(e) => Err(TemplateError::IoError(e)),
        }
    }

    /// The configured custom template path with `~` expanded, if any.
    #[must_use]
    pub fn template_path(&self) -> Option<PathBuf> {
        self.template.as_deref().map(|raw| PathBuf::from(shellexpand::tilde(raw).into_owned()))
    }
}

/// Default config location: `~/.testplate/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".testplate").join("config.toml"))
}
