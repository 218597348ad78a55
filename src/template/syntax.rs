//! Minimal Python syntax smoke check.
//!
//! The template document must parse as syntactically valid code even though
//! every placeholder reference is unresolved. Pulling in a Python grammar for
//! that would be overkill, so this module performs the line-level checks that
//! catch the mistakes people actually make when editing scaffolding text:
//!
//! - brackets balance across the document and never go negative
//! - string literals terminate
//! - block headers (`class`, `def`, `if`, ...) end with a colon
//! - decorators are followed by a `def`/`class` (or another decorator)
//! - indentation moves in consistent four-space steps
//!
//! Unresolved names are expected and never reported.

use crate::template::placeholders::strip_strings_and_comments;
use serde::Serialize;
use std::fmt;

/// Keywords that may open an indented block with a trailing colon.
const BLOCK_KEYWORDS: &[&str] = &[
    "class", "def", "if", "elif", "else", "for", "while", "with", "try", "except", "finally",
    "match", "case", "async",
];

/// A single problem found by the smoke check.
#[derive(Debug, Clone, Serialize)]
pub struct SyntaxIssue {
    /// 1-based line number in the document.
    pub line: usize,
    /// Human-readable description of the problem.
    pub message: String,
}

impl fmt::Display for SyntaxIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Run the smoke check over a template document's text.
///
/// Returns an empty vector when the document passes.
#[must_use]
pub fn check(text: &str) -> Vec<SyntaxIssue> {
    let mut issues = Vec::new();

    let stripped = strip_strings_and_comments(text);
    if let Some(line) = stripped.unterminated_string {
        issues.push(SyntaxIssue {
            line,
            message: "unterminated string literal".to_string(),
        });
    }

    let mut depth: i64 = 0;
    let mut pending_decorator: Option<usize> = None;
    // Start line and accumulated text of the current logical line
    let mut logical_start = 0usize;
    let mut logical = String::new();

    for (idx, raw_line) in stripped.text.lines().enumerate() {
        let line_no = idx + 1;

        if depth == 0 {
            logical_start = line_no;
            logical.clear();
        }

        for c in raw_line.chars() {
            match c {
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => {
                    depth -= 1;
                    if depth < 0 {
                        issues.push(SyntaxIssue {
                            line: line_no,
                            message: format!("unmatched closing bracket '{c}'"),
                        });
                        depth = 0;
                    }
                }
                _ => {}
            }
        }

        logical.push_str(raw_line);
        logical.push(' ');

        if depth > 0 {
            // Logical line continues on the next physical line
            continue;
        }

        let statement = logical.trim();
        if statement.is_empty() {
            continue;
        }

        check_statement(statement, logical_start, &mut pending_decorator, &mut issues);

        let indent = indent_width(raw_line_at(&stripped.text, logical_start));
        if indent % 4 != 0 {
            issues.push(SyntaxIssue {
                line: logical_start,
                message: format!("indentation of {indent} spaces is not a multiple of 4"),
            });
        }
    }

    if depth > 0 {
        issues.push(SyntaxIssue {
            line: stripped.text.lines().count(),
            message: "unclosed bracket at end of document".to_string(),
        });
    }

    if let Some(line) = pending_decorator {
        issues.push(SyntaxIssue {
            line,
            message: "decorator is not followed by a function or class".to_string(),
        });
    }

    issues
}

/// Check one logical statement at bracket depth zero.
fn check_statement(
    statement: &str,
    line: usize,
    pending_decorator: &mut Option<usize>,
    issues: &mut Vec<SyntaxIssue>,
) {
    let first_word = statement
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .next()
        .unwrap_or("");

    if statement.starts_with('@') {
        *pending_decorator = Some(line);
        return;
    }

    if pending_decorator.is_some() {
        if first_word == "def" || first_word == "class" || first_word == "async" {
            *pending_decorator = None;
        } else {
            issues.push(SyntaxIssue {
                line,
                message: "decorator is not followed by a function or class".to_string(),
            });
            *pending_decorator = None;
        }
    }

    let is_block_keyword = BLOCK_KEYWORDS.contains(&first_word);
    let ends_with_colon = statement.trim_end().ends_with(':');

    if is_block_keyword && !ends_with_colon && first_word != "async" {
        issues.push(SyntaxIssue {
            line,
            message: format!("'{first_word}' statement does not end with ':'"),
        });
    }
}

/// Leading-whitespace width of a line, tabs counted as a full indent step.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += 4,
            _ => break,
        }
    }
    width
}

/// The raw text of the 1-based `line_no` line.
fn raw_line_at(text: &str, line_no: usize) -> &str {
    text.lines().nth(line_no.saturating_sub(1)).unwrap_or("")
}
