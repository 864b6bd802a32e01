//! Line classification.
//!
//! One physical line of source text becomes one [`ParsedLine`] — or nothing,
//! when the line is blank, comment-only, or malformed. Malformed lines are
//! skipped with a [`Diagnostic`]; they never abort the document.
//!
//! The default grammar recognizes three shapes:
//!
//! ```text
//! section:          # header: names a nesting level, no value
//!     - item        # list item: appends to the list at the current path
//!     key: value    # key-value: key and scalar on one line
//! ```
//!
//! With a literal [`Splitter`](crate::Splitter) configured, all three rules
//! are replaced by a single split on the configured substring.

use crate::error::{Diagnostic, DiagnosticKind};
use crate::scalar::{self, TokenError};
use crate::{Options, Splitter, Value};

/// The shape of one classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `key:` — names a nesting level, carries no value.
    SectionHeader,
    /// `- value` — appends one element to the list at the current path.
    ListItem,
    /// `key: value` — a key with its scalar on the same line.
    KeyValue,
}

/// One successfully classified line. Ephemeral; consumed by the document
/// builder and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub kind: LineKind,
    /// The key, for headers and key-value lines.
    pub key: Option<String>,
    /// The coerced value, for list items and key-value lines.
    pub value: Option<Value>,
    /// Indentation depth: leading whitespace columns / configured width.
    pub depth: usize,
}

/// Records a diagnostic, also logging it when the configuration asks for it.
pub(crate) fn report(diagnostics: &mut Vec<Diagnostic>, logging: bool, diagnostic: Diagnostic) {
    if logging {
        tracing::warn!("{}", diagnostic);
    }
    diagnostics.push(diagnostic);
}

/// Classifies one line of source text.
///
/// Returns `None` for blank, comment-only, and malformed lines; malformed
/// ones push a diagnostic first. `line_no` is 1-based and `source` is the
/// source identifier for diagnostics, when known.
pub fn classify(
    line: &str,
    line_no: usize,
    source: Option<&str>,
    options: &Options,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<ParsedLine> {
    // Everything from the comment leader onward is invisible.
    let code = line.split(options.comment).next().unwrap_or("");
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return None;
    }

    let leading = code.chars().take_while(|c| c.is_whitespace()).count();
    if options.indent == 0 || leading % options.indent != 0 {
        report(
            diagnostics,
            options.logging,
            Diagnostic::at(DiagnosticKind::WrongIndentation, line_no, source),
        );
        return None;
    }
    let depth = leading / options.indent;

    let (kind, key, raw_token) = match &options.splitter {
        Splitter::Literal(separator) => {
            let mut segments = trimmed.split(separator.as_str()).filter(|s| !s.is_empty());
            let Some(key) = segments.next() else {
                report(
                    diagnostics,
                    options.logging,
                    Diagnostic::at(DiagnosticKind::ConfusedLine, line_no, source),
                );
                return None;
            };
            // Remaining segments are concatenated with no separator, not
            // rejoined with the splitter. Long-standing quirk; preserved.
            let token: String = segments.collect();
            (LineKind::KeyValue, Some(key.to_string()), Some(token))
        }
        Splitter::Grammar => {
            if let Some(key) = trimmed.strip_suffix(':') {
                (LineKind::SectionHeader, Some(key.to_string()), None)
            } else if trimmed.starts_with('-') {
                // Drop the dash and the character after it, per the "- "
                // prefix convention; a bare "-" yields the empty token.
                let token: String = trimmed.chars().skip(2).collect();
                (LineKind::ListItem, None, Some(token))
            } else if trimmed.contains(": ") {
                let mut segments = trimmed.split(": ");
                let key = segments.next().unwrap_or("").to_string();
                let token = segments.collect::<Vec<_>>().join(": ");
                (LineKind::KeyValue, Some(key), Some(token))
            } else {
                report(
                    diagnostics,
                    options.logging,
                    Diagnostic::at(DiagnosticKind::ConfusedLine, line_no, source),
                );
                return None;
            }
        }
    };

    let value = match raw_token {
        None => None,
        // An empty token skips coercion and is the empty string.
        Some(token) if token.is_empty() => Some(Value::String(String::new())),
        Some(token) => match scalar::decode(&token) {
            Ok(value) => Some(value),
            // List items take bare unquoted words as strings ("- admin" is
            // the string admin). Key-value positions stay strict.
            Err(TokenError::Unrecognized) if kind == LineKind::ListItem => {
                Some(Value::String(token))
            }
            Err(err) => {
                let diagnostic_kind = match err {
                    TokenError::Unrecognized => DiagnosticKind::ConfusingItem,
                    TokenError::InvalidBigInt => DiagnosticKind::InvalidBigInt,
                };
                report(
                    diagnostics,
                    options.logging,
                    Diagnostic::at(diagnostic_kind, line_no, source),
                );
                return None;
            }
        },
    };

    Some(ParsedLine {
        kind,
        key,
        value,
        depth,
    })
}
