//! Error handling for testplate
//!
//! This module provides the error types and user-friendly error reporting for
//! the testplate CLI. The error system is designed around two core principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`TemplateError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! The template document itself has no error taxonomy: it is static content
//! that either loads or is absent. Errors arise only at the edges: reading a
//! custom template file, parsing configuration, resolving CLI arguments, and
//! writing rendered output.
//!
//! # Error Conversion and Context
//!
//! Common standard library errors are automatically converted:
//! - [`std::io::Error`] → [`TemplateError::IoError`]
//! - [`toml::de::Error`] → [`TemplateError::TomlError`]
//!
//! Use [`user_friendly_error`] to convert any error into a user-friendly
//! format with contextual suggestions.
//!
//! # Examples
//!
//! ```rust,no_run
//! use testplate_cli::core::{TemplateError, user_friendly_error};
//!
//! fn load_custom_template() -> Result<(), TemplateError> {
//!     Err(TemplateError::TemplateFileNotFound { path: "scaffold.py".to_string() })
//! }
//!
//! if let Err(e) = load_custom_template() {
//!     let ctx = user_friendly_error(anyhow::Error::from(e));
//!     ctx.display(); // Shows colored error with suggestions
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for testplate operations
///
/// Each variant represents a specific failure mode and carries the context
/// needed to explain it to the user. Error messages are written for end
/// users, not just developers, and most map to an actionable suggestion in
/// [`user_friendly_error`].
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A custom template file specified via `--template` or the config file
    /// does not exist or could not be read.
    #[error("Template file not found: {path}")]
    TemplateFileNotFound {
        /// The path that was expected to contain a template file
        path: String,
    },

    /// A custom template file was read but could not be split into sections.
    ///
    /// The provider recognizes sections by top-level `class` declarations;
    /// a template without any is not usable as a section-structured document.
    #[error("Invalid template structure in {file}: {reason}")]
    TemplateParseError {
        /// The file that failed to parse
        file: String,
        /// Why the template could not be structured
        reason: String,
    },

    /// A section name given on the command line does not exist in the
    /// document.
    #[error("Section '{name}' not found in template")]
    SectionNotFound {
        /// The requested section name
        name: String,
        /// The section titles that do exist, for the error message
        available: String,
    },

    /// A `--set` substitution references a symbol that is not a placeholder
    /// of the document.
    #[error("Unknown placeholder '{name}'")]
    UnknownPlaceholder {
        /// The placeholder name that was not recognized
        name: String,
        /// The placeholder symbols the document actually contains
        available: String,
    },

    /// A `--set` argument was not in `PLACEHOLDER=NAME` form, or the
    /// replacement is not a valid identifier.
    #[error("Invalid substitution '{value}': {reason}")]
    InvalidSubstitution {
        /// The raw `--set` argument
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Template rendering failed inside Tera.
    #[error("Failed to render template: {reason}")]
    RenderError {
        /// The underlying rendering failure
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration file not found at an explicitly requested path.
    ///
    /// A missing config at the *default* location is not an error; this
    /// variant fires only for `--config` / `TESTPLATE_CONFIG` paths.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was expected to contain the config file
        path: String,
    },

    /// The output target of `init` or `render -o` already exists.
    #[error("File already exists: {path}")]
    FileExists {
        /// The path that already exists
        path: String,
    },

    /// General file system operation failure
    #[error("File system error: {operation}")]
    FileSystemError {
        /// The operation that failed (e.g., "create directory", "write file")
        operation: String,
        /// The path involved in the failed operation
        path: String,
    },

    /// IO errors from standard library operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Generic error fallback for unexpected conditions
    #[error("{message}")]
    Other {
        /// The error message describing what went wrong
        message: String,
    },
}

/// Wrapper that pairs a [`TemplateError`] with user-facing context
///
/// Suggestions should be actionable steps; details explain why the error
/// occurred. Both are optional and rendered with terminal colors by
/// [`display`](ErrorContext::display).
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: TemplateError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: TemplateError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are displayed in green in the terminal to draw attention.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    ///
    /// Details are displayed in yellow, less prominent than the main error
    /// or suggestion.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// This function is the main entry point for converting arbitrary errors into
/// user-friendly error messages for CLI display. It recognizes common error
/// types and provides appropriate context:
/// - [`TemplateError`] variants with tailored suggestions
/// - [`std::io::Error`] with filesystem-specific guidance
/// - [`toml::de::Error`] with TOML syntax help
/// - Generic errors with the full error chain attached
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(template_error) = error.downcast_ref::<TemplateError>() {
        return create_error_context(template_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(TemplateError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion(
                    "Check file ownership or try running with elevated permissions",
                )
                .with_details(
                    "This error occurs when testplate doesn't have permission to read or write files",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(TemplateError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(
                    "This error occurs when a required file or directory cannot be found",
                );
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(TemplateError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion(
            "Check the TOML syntax in your config file. Verify quotes, brackets, and table headers",
        )
        .with_details(
            "TOML parsing errors are usually caused by syntax issues like missing quotes or mismatched brackets",
        );
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(TemplateError::Other {
        message,
    })
}

/// Map each [`TemplateError`] variant to an [`ErrorContext`] with tailored
/// suggestions and details.
fn create_error_context(error: &TemplateError) -> ErrorContext {
    match error {
        TemplateError::TemplateFileNotFound {
            path,
        } => ErrorContext::new(TemplateError::TemplateFileNotFound {
            path: path.clone(),
        })
        .with_suggestion("Check the path given via --template or the 'template' key in your config")
        .with_details("Without a custom template, testplate uses its built-in pytest scaffolding"),

        TemplateError::TemplateParseError {
            file,
            reason,
        } => ErrorContext::new(TemplateError::TemplateParseError {
            file: file.clone(),
            reason: reason.clone(),
        })
        .with_suggestion(
            "A template needs at least one top-level 'class TestSomething:' block to define a section",
        ),

        TemplateError::SectionNotFound {
            name,
            available,
        } => ErrorContext::new(TemplateError::SectionNotFound {
            name: name.clone(),
            available: available.clone(),
        })
        .with_suggestion(format!("Available sections: {available}"))
        .with_details("Run 'testplate list' to see all sections with their titles"),

        TemplateError::UnknownPlaceholder {
            name,
            available,
        } => ErrorContext::new(TemplateError::UnknownPlaceholder {
            name: name.clone(),
            available: available.clone(),
        })
        .with_suggestion(format!("Known placeholders: {available}"))
        .with_details(
            "Placeholders are the undefined symbols of the template (e.g. function_under_test); \
             --set replaces them with your own names",
        ),

        TemplateError::InvalidSubstitution {
            value,
            reason,
        } => ErrorContext::new(TemplateError::InvalidSubstitution {
            value: value.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Use the form --set PLACEHOLDER=new_name, e.g. --set function_under_test=parse_header"),

        TemplateError::RenderError {
            reason,
        } => ErrorContext::new(TemplateError::RenderError {
            reason: reason.clone(),
        })
        .with_suggestion("Check that substitution values are plain Python identifiers"),

        TemplateError::ConfigNotFound {
            path,
        } => ErrorContext::new(TemplateError::ConfigNotFound {
            path: path.clone(),
        })
        .with_suggestion("Check the path given via --config or the TESTPLATE_CONFIG environment variable")
        .with_details("The default config location is ~/.testplate/config.toml; a missing default config is fine"),

        TemplateError::FileExists {
            path,
        } => ErrorContext::new(TemplateError::FileExists {
            path: path.clone(),
        })
        .with_suggestion("Use --force to overwrite, or pick a different output path"),

        TemplateError::ConfigError {
            message,
        } => ErrorContext::new(TemplateError::ConfigError {
            message: message.clone(),
        })
        .with_suggestion("Check your config file for valid TOML and known keys ('template', '[placeholders]')"),

        TemplateError::FileSystemError {
            operation,
            path,
        } => ErrorContext::new(TemplateError::FileSystemError {
            operation: operation.clone(),
            path: path.clone(),
        })
        .with_suggestion("Check that the path exists and you have the required permissions"),

        TemplateError::IoError(e) => ErrorContext::new(TemplateError::Other {
            message: format!("IO error: {e}"),
        }),

        TemplateError::TomlError(e) => ErrorContext::new(TemplateError::ConfigError {
            message: e.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your config file"),

        TemplateError::Other {
            message,
        } => ErrorContext::new(TemplateError::Other {
            message: message.clone(),
        }),
    }
}
