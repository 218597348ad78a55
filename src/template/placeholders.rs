//! Placeholder symbol analysis.
//!
//! A placeholder symbol is an identifier the example code references but
//! never defines: `function_under_test`, `ServiceClass`, `DomainEntity`, and
//! friends. They are the names a human author is expected to replace when
//! adapting the scaffolding into a real test file.
//!
//! The analysis is deliberately lexical. It strips strings and comments,
//! collects the names the document *binds* (imports, `class`/`def`
//! declarations, parameters, assignment and `as`/`for` targets) and the names
//! it *references*, and reports the references that are neither bound nor
//! Python keywords/builtins. Attribute accesses (`db.query`) and keyword
//! arguments (`match="..."`) are not references.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Python keywords plus the builtins the scaffolding plausibly touches.
/// Anything in this list is never reported as a placeholder.
const KEYWORDS_AND_BUILTINS: &[&str] = &[
    // keywords
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "case", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "match", "nonlocal", "not", "or", "pass", "raise", "return",
    "self", "cls", "try", "while", "with", "yield",
    // builtins
    "abs", "all", "any", "bool", "bytes", "callable", "classmethod", "dict", "dir", "divmod",
    "enumerate", "filter", "float", "format", "frozenset", "getattr", "hasattr", "hash", "hex",
    "id", "int", "isinstance", "issubclass", "iter", "len", "list", "map", "max", "min", "next",
    "object", "oct", "open", "ord", "pow", "print", "property", "range", "repr", "reversed",
    "round", "set", "setattr", "slice", "sorted", "staticmethod", "str", "sum", "super", "tuple",
    "type", "vars", "zip",
    // exceptions
    "ArithmeticError", "AssertionError", "AttributeError", "BaseException", "ConnectionError",
    "Exception", "FileNotFoundError", "IOError", "IndexError", "KeyError", "NameError",
    "NotImplementedError", "OSError", "RuntimeError", "StopIteration", "TypeError", "ValueError",
    "ZeroDivisionError",
];

static IDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z_]\w*").unwrap());

static CLASS_OR_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:class|def)\s+([A-Za-z_]\w*)").unwrap());

static AS_BINDING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bas\s+([A-Za-z_]\w*)").unwrap());

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Za-z_]\w*(?:\s*,\s*[A-Za-z_]\w*)*)\s*=[^=]").unwrap()
});

static FOR_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfor\s+([A-Za-z_]\w*(?:\s*,\s*[A-Za-z_]\w*)*)\s+in\b").unwrap()
});

static IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*import\s+(.+)$").unwrap());

static FROM_IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*from\s+[\w.]+\s+import\s+(.+)$").unwrap());

/// Result of analyzing a template document's symbols.
#[derive(Debug, Clone)]
pub struct PlaceholderAnalysis {
    /// Referenced but unbound identifiers, sorted.
    pub placeholders: BTreeSet<String>,
    /// Identifiers the document binds (imports, declarations, targets).
    pub defined: BTreeSet<String>,
}

/// Analyze a template document for placeholder symbols.
#[must_use]
pub fn analyze(text: &str) -> PlaceholderAnalysis {
    let stripped = strip_strings_and_comments(text).text;
    let defined = collect_bound_names(&stripped);
    let referenced = collect_references(&stripped);

    let placeholders = referenced
        .into_iter()
        .filter(|name| !defined.contains(name))
        .filter(|name| !KEYWORDS_AND_BUILTINS.contains(&name.as_str()))
        .collect();

    PlaceholderAnalysis {
        placeholders,
        defined,
    }
}

/// Output of [`strip_strings_and_comments`].
pub(crate) struct StrippedText {
    /// The input with string and comment contents blanked out. Newlines and
    /// text length are preserved so line numbers stay valid.
    pub text: String,
    /// 1-based line of an unterminated string literal, if any.
    pub unterminated_string: Option<usize>,
}

/// Blank out string literals and `#` comments, preserving layout.
///
/// Handles single and triple quotes of both styles and backslash escapes.
/// Shared with the syntax smoke checker, which must not count brackets or
/// colons inside strings.
pub(crate) fn strip_strings_and_comments(text: &str) -> StrippedText {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut line = 1usize;
    let mut unterminated = None;
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\n' {
            line += 1;
            out.push(b);
            i += 1;
        } else if b == b'#' {
            while i < bytes.len() && bytes[i] != b'\n' {
                out.push(b' ');
                i += 1;
            }
        } else if b == b'"' || b == b'\'' {
            let quote = b;
            let triple = i + 2 < bytes.len() && bytes[i + 1] == quote && bytes[i + 2] == quote;
            let start_line = line;
            let skip = if triple { 3 } else { 1 };
            for _ in 0..skip {
                out.push(b' ');
            }
            i += skip;

            let mut closed = false;
            while i < bytes.len() {
                let c = bytes[i];
                if c == b'\\' && i + 1 < bytes.len() {
                    out.push(b' ');
                    out.push(if bytes[i + 1] == b'\n' { b'\n' } else { b' ' });
                    if bytes[i + 1] == b'\n' {
                        line += 1;
                    }
                    i += 2;
                } else if c == quote
                    && (!triple
                        || (i + 2 < bytes.len()
                            && bytes[i + 1] == quote
                            && bytes[i + 2] == quote))
                {
                    for _ in 0..skip {
                        out.push(b' ');
                    }
                    i += skip;
                    closed = true;
                    break;
                } else if c == b'\n' {
                    if !triple {
                        // Single-quoted strings do not span lines
                        break;
                    }
                    line += 1;
                    out.push(b'\n');
                    i += 1;
                } else {
                    out.push(b' ');
                    i += 1;
                }
            }

            if !closed && unterminated.is_none() {
                unterminated = Some(start_line);
            }
        } else {
            out.push(b);
            i += 1;
        }
    }

    StrippedText {
        text: String::from_utf8(out).unwrap_or_default(),
        unterminated_string: unterminated,
    }
}

/// Collect every name the document binds.
fn collect_bound_names(stripped: &str) -> BTreeSet<String> {
    let mut bound = BTreeSet::new();

    for cap in IMPORT_LINE.captures_iter(stripped) {
        for item in cap[1].split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            // `import a.b as c` binds c; `import a.b` binds a
            if let Some((_, alias)) = item.split_once(" as ") {
                bound.insert(alias.trim().to_string());
            } else if let Some(first) = item.split('.').next() {
                bound.insert(first.trim().to_string());
            }
        }
    }

    for cap in FROM_IMPORT_LINE.captures_iter(stripped) {
        for item in cap[1].trim_matches(|c| c == '(' || c == ')').split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            if let Some((_, alias)) = item.split_once(" as ") {
                bound.insert(alias.trim().to_string());
            } else {
                bound.insert(item.to_string());
            }
        }
    }

    for cap in CLASS_OR_DEF.captures_iter(stripped) {
        bound.insert(cap[1].to_string());
    }

    for cap in AS_BINDING.captures_iter(stripped) {
        bound.insert(cap[1].to_string());
    }

    for cap in ASSIGNMENT.captures_iter(stripped) {
        for name in cap[1].split(',') {
            bound.insert(name.trim().to_string());
        }
    }

    for cap in FOR_TARGET.captures_iter(stripped) {
        for name in cap[1].split(',') {
            bound.insert(name.trim().to_string());
        }
    }

    collect_def_params(stripped, &mut bound);

    bound
}

/// Bind the parameters of every `def`, including multi-line signatures.
fn collect_def_params(stripped: &str, bound: &mut BTreeSet<String>) {
    static DEF_OPEN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\bdef\s+[A-Za-z_]\w*\s*\(").unwrap());

    for m in DEF_OPEN.find_iter(stripped) {
        let rest = &stripped[m.end()..];
        let mut depth = 1usize;
        let mut end = rest.len();
        for (idx, c) in rest.char_indices() {
            match c {
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end = idx;
                        break;
                    }
                }
                _ => {}
            }
        }

        for param in rest[..end].split(',') {
            let param = param.trim().trim_start_matches('*');
            let name = param
                .split(|c| c == ':' || c == '=')
                .next()
                .unwrap_or("")
                .trim();
            if !name.is_empty() && IDENT.is_match(name) {
                bound.insert(name.to_string());
            }
        }
    }
}

/// Collect referenced identifiers: plain names that are neither attribute
/// accesses nor keyword-argument names. Import clauses are module paths, not
/// references, and are blanked out first.
fn collect_references(stripped: &str) -> BTreeSet<String> {
    let without_imports: String = stripped
        .lines()
        .map(|line| {
            let t = line.trim_start();
            if t.starts_with("import ") || t.starts_with("from ") {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let bytes = without_imports.as_bytes();
    let mut referenced = BTreeSet::new();

    for m in IDENT.find_iter(&without_imports) {
        // Skip attribute access: preceded by '.'
        if m.start() > 0 && bytes[m.start() - 1] == b'.' {
            continue;
        }

        // Skip keyword arguments and assignment targets: followed by a
        // single '=' (possibly after spaces). Targets are bound anyway.
        let mut j = m.end();
        while j < bytes.len() && (bytes[j] == b' ' || bytes[j] == b'\t') {
            j += 1;
        }
        if j < bytes.len() && bytes[j] == b'=' && (j + 1 >= bytes.len() || bytes[j + 1] != b'=') {
            continue;
        }

        referenced.insert(m.as_str().to_string());
    }

    referenced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_call_target_is_placeholder() {
        let analysis = analyze("def test_x():\n    result = function_under_test(1)\n");
        assert!(analysis.placeholders.contains("function_under_test"));
        assert!(!analysis.placeholders.contains("result"));
        assert!(!analysis.placeholders.contains("test_x"));
    }

    #[test]
    fn test_imports_bind_names() {
        let text = "import pytest\nfrom unittest.mock import Mock, patch, MagicMock\n\
                    @pytest.fixture\ndef helper():\n    return Mock()\n";
        let analysis = analyze(text);
        assert!(analysis.placeholders.is_empty(), "got {:?}", analysis.placeholders);
        assert!(analysis.defined.contains("Mock"));
        assert!(analysis.defined.contains("pytest"));
    }

    #[test]
    fn test_attribute_access_is_not_a_reference() {
        let analysis = analyze("def t(db):\n    db.query.assert_called_once()\n");
        assert!(analysis.placeholders.is_empty(), "got {:?}", analysis.placeholders);
    }

    #[test]
    fn test_keyword_argument_is_not_a_reference() {
        let text = "import pytest\ndef t():\n    with pytest.raises(ValueError, match=\"boom\"):\n        pass\n";
        let analysis = analyze(text);
        assert!(analysis.placeholders.is_empty(), "got {:?}", analysis.placeholders);
    }

    #[test]
    fn test_with_as_binds_target() {
        let text = "from unittest.mock import patch\ndef t():\n    with patch('module.api') as mock_api:\n        mock_api.get(1)\n";
        let analysis = analyze(text);
        assert!(analysis.defined.contains("mock_api"));
        assert!(analysis.placeholders.is_empty(), "got {:?}", analysis.placeholders);
    }

    #[test]
    fn test_multiline_signature_params_are_bound() {
        let text = "def t(\n    self, input_value, expected_output\n):\n    assert input_value != expected_output\n";
        let analysis = analyze(text);
        assert!(analysis.defined.contains("input_value"));
        assert!(analysis.defined.contains("expected_output"));
        assert!(analysis.placeholders.is_empty(), "got {:?}", analysis.placeholders);
    }

    #[test]
    fn test_strings_and_comments_are_ignored() {
        let text = "x = \"ghost_symbol(1)\"  # other_ghost(2)\n";
        let analysis = analyze(text);
        assert!(analysis.placeholders.is_empty(), "got {:?}", analysis.placeholders);
    }

    #[test]
    fn test_strip_reports_unterminated_string() {
        let stripped = strip_strings_and_comments("x = 'open\ny = 2\n");
        assert_eq!(stripped.unterminated_string, Some(1));
    }

    #[test]
    fn test_strip_preserves_line_count() {
        let text = "a = 1\nb = \"\"\"multi\nline\"\"\"\nc = 3\n";
        let stripped = strip_strings_and_comments(text);
        assert_eq!(stripped.text.lines().count(), text.lines().count());
        assert!(stripped.unterminated_string.is_none());
    }
}
