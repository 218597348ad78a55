//! Section model for the template document.
//!
//! A template document is an ordered sequence of sections, each introduced by
//! a top-level Python `class` declaration. The four sections of the built-in
//! document each carry a stable [`SectionKind`] with a human-readable title;
//! custom templates are classified with the same class-name heuristics.

use serde::Serialize;

/// The kind of a template section.
///
/// Kinds give sections stable identity independent of the exact class name
/// used in the document, so `testplate show --section async` keeps working
/// when a custom template renames its classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// Plain synchronous unit tests exercising a single function or class.
    Basic,
    /// Tests that mock out external dependencies via fixtures.
    DependencyMocked,
    /// Tests for async operations, marked with the asyncio marker.
    Async,
    /// Tests for domain entity business rules and events.
    DomainEntity,
}

impl SectionKind {
    /// All kinds in document order of the built-in template.
    pub const ALL: [Self; 4] =
        [Self::Basic, Self::DependencyMocked, Self::Async, Self::DomainEntity];

    /// The human-readable section title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Basic => "basic behavior tests",
            Self::DependencyMocked => "dependency-mocked tests",
            Self::Async => "async operation tests",
            Self::DomainEntity => "domain entity tests",
        }
    }

    /// Short name accepted on the command line (`--section async`).
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::DependencyMocked => "mocked",
            Self::Async => "async",
            Self::DomainEntity => "entity",
        }
    }

    /// Classify a section from the Python class name that introduces it.
    ///
    /// Falls back to [`SectionKind::Basic`] when no keyword matches, so any
    /// top-level test class yields a usable section.
    #[must_use]
    pub fn classify(class_name: &str) -> Self {
        let lowered = class_name.to_lowercase();
        if lowered.contains("async") {
            Self::Async
        } else if lowered.contains("dependenc") || lowered.contains("mock") {
            Self::DependencyMocked
        } else if lowered.contains("domain") || lowered.contains("entity") {
            Self::DomainEntity
        } else {
            Self::Basic
        }
    }
}

/// One section of a template document.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Stable section kind derived from the class name.
    pub kind: SectionKind,
    /// Human-readable title shown by `testplate list`.
    pub title: String,
    /// The Python class name introducing the section.
    pub class_name: String,
    /// 1-based line of the `class` declaration in the document.
    pub start_line: usize,
    /// 1-based last line of the section (inclusive).
    pub end_line: usize,
    /// The section text, sliced verbatim from the document.
    #[serde(skip)]
    pub text: String,
}

impl Section {
    /// Whether the section body holds anything beyond the class header.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.lines().skip(1).all(|line| line.trim().is_empty())
    }

    /// Whether `name` selects this section: matches the kind's short name,
    /// the title, or the class name, case-insensitively.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        lowered == self.kind.short_name()
            || lowered == self.title.to_lowercase()
            || lowered == self.class_name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_from_class_name() {
        assert_eq!(SectionKind::classify("TestClassOrFunctionName"), SectionKind::Basic);
        assert_eq!(
            SectionKind::classify("TestClassWithDependencies"),
            SectionKind::DependencyMocked
        );
        assert_eq!(SectionKind::classify("TestAsyncOperations"), SectionKind::Async);
        assert_eq!(SectionKind::classify("TestDomainEntity"), SectionKind::DomainEntity);
    }

    #[test]
    fn test_titles_are_distinct() {
        let titles: std::collections::HashSet<_> =
            SectionKind::ALL.iter().map(|k| k.title()).collect();
        assert_eq!(titles.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_section_matching_is_case_insensitive() {
        let section = Section {
            kind: SectionKind::Async,
            title: SectionKind::Async.title().to_string(),
            class_name: "TestAsyncOperations".to_string(),
            start_line: 1,
            end_line: 10,
            text: "class TestAsyncOperations:\n    pass\n".to_string(),
        };

        assert!(section.matches("async"));
        assert!(section.matches("Async Operation Tests"));
        assert!(section.matches("testasyncoperations"));
        assert!(!section.matches("entity"));
    }

    #[test]
    fn test_empty_section_detection() {
        let section = Section {
            kind: SectionKind::Basic,
            title: SectionKind::Basic.title().to_string(),
            class_name: "TestNothing".to_string(),
            start_line: 1,
            end_line: 2,
            text: "class TestNothing:\n\n".to_string(),
        };
        assert!(section.is_empty());
    }
}
