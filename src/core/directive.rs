//! Directive matcher
//!
//! Classifies a single input line as one of:
//! #include "target"   (quoted form)
//! #include <target>   (angle-bracket form)
//! or plain text. Matching is purely syntactic on one line; directives never
//! span lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// Static regex for the quoted form: `#include "X"`
/// Whitespace is tolerated around `#`, `include` and at both line ends.
static QUOTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*#\s*include\s*"([^"]*)"\s*$"#).expect("Invalid QUOTED_RE regex")
});

/// Static regex for the angle-bracket form: `#include <X>`
static ANGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\s*include\s*<([^>]*)>\s*$").expect("Invalid ANGLE_RE regex"));

/// Which resolution strategy a directive requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeKind {
    /// `"X"` - try relative to the including file first, then the search list
    Quoted,
    /// `<X>` - search list only
    AngleBracketed,
}

/// A matched include directive from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    /// Target path exactly as written between the delimiters
    pub target: String,
    pub kind: IncludeKind,
}

/// Classify one line. Returns `None` for plain text, including malformed or
/// partially directive-like lines. The target is extracted verbatim with no
/// path normalization.
pub fn parse_directive(line: &str) -> Option<IncludeDirective> {
    if let Some(caps) = QUOTED_RE.captures(line) {
        return Some(IncludeDirective {
            target: caps[1].to_string(),
            kind: IncludeKind::Quoted,
        });
    }

    if let Some(caps) = ANGLE_RE.captures(line) {
        return Some(IncludeDirective {
            target: caps[1].to_string(),
            kind: IncludeKind::AngleBracketed,
        });
    }

    None
}
