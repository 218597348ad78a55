//! testplate - Test-scaffolding template provider
//!
//! testplate ships a curated pytest unit-test scaffolding template (the
//! template document) and lets authors inspect, validate, render, and copy
//! it into a project. The document is static example text organized into
//! four named sections - basic behavior tests, dependency-mocked tests,
//! async operation tests, and domain entity tests - referencing placeholder
//! symbols (`function_under_test`, `ServiceClass`, `DomainEntity`) that a
//! human author replaces with real names.
//!
//! # Architecture Overview
//!
//! - The template provider exposes the embedded document **verbatim**;
//!   retrieval is idempotent and side-effect free
//! - Structure (sections, placeholder symbols) is *derived* from the text,
//!   never stored separately, so the text remains the single source of truth
//! - Rendering substitutes placeholder symbols via Tera; an empty
//!   substitution set reproduces the document byte-for-byte
//! - Custom templates load from a file given via `--template` or the config
//!   and get the same structural treatment as the built-in one
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (`show`, `list`, `render`, `validate`,
//!   `init`)
//! - [`config`] - Global configuration (`~/.testplate/config.toml`)
//! - [`core`] - Error types and user-friendly error reporting
//! - [`template`] - The document model: sections, placeholder analysis,
//!   syntax smoke check, structural validation
//! - [`templating`] - Tera-based placeholder substitution
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Inspect the scaffolding
//! testplate list
//! testplate show --section async
//!
//! # Verify the template contract
//! testplate validate
//!
//! # Start a real test file
//! testplate render --set function_under_test=parse_header -o tests/test_parse.py
//! testplate init --dir my-project
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod template;
pub mod templating;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
