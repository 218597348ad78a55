//! Core types and functionality for testplate
//!
//! This module forms the foundation of the crate's type system. It provides
//! the error handling used throughout the codebase:
//!
//! - [`TemplateError`] - Enumerated error types covering all failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! # Design Principles
//!
//! ## Error First Design
//! Every operation that can fail returns a [`Result`] with meaningful error
//! information. Errors are designed to be informative, actionable, and
//! user-friendly.
//!
//! ## User Experience
//! All user-facing errors include contextual suggestions and clear guidance
//! for resolution. Terminal colors highlight the important parts.

pub mod error;

pub use error::{ErrorContext, TemplateError, user_friendly_error};
