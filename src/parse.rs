//! Document construction.
//!
//! Drives the line classifier over a whole source, tracking the current
//! nesting path from indentation and assembling the output tree. Parsing is
//! forgiving: every malformed line is skipped with a diagnostic and the rest
//! of the document still loads.
//!
//! ## Path tracking
//!
//! The builder keeps an ordered key path identifying the current insertion
//! point. A header or key-value line at a depth at or beyond the current
//! path length extends the path by exactly one key — regardless of how far
//! the indentation jumped — provided nothing already exists at the extended
//! path. A shallower line truncates the path to its depth first. This exact
//! rule (including its behavior on multi-level indentation jumps) is what
//! existing documents depend on, so it is preserved as-is.
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::{parse_str, Value};
//!
//! let parsed = parse_str("name: 'Alice'\ntags:\n    - admin\n    - 42");
//! assert!(parsed.diagnostics.is_empty());
//! assert_eq!(parsed.tree.get("name"), Some(&Value::String("Alice".into())));
//! assert_eq!(
//!     parsed.tree.get("tags"),
//!     Some(&Value::List(vec![
//!         Value::String("admin".into()),
//!         Value::Number(42.0),
//!     ]))
//! );
//! ```

use crate::error::{Diagnostic, DiagnosticKind};
use crate::line::{self, LineKind};
use crate::{DocMap, Options, Value};

/// The outcome of parsing one source: the (possibly partial) tree and every
/// non-fatal diagnostic encountered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub tree: DocMap,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses in-memory text with default [`Options`].
///
/// Never fails: malformed lines are skipped with diagnostics and the rest of
/// the document is kept. In-memory parses bypass the
/// [`DocumentCache`](crate::DocumentCache) entirely.
#[must_use]
pub fn parse_str(text: &str) -> Parsed {
    parse_str_with_options(text, &Options::default())
}

/// Parses in-memory text with explicit [`Options`].
#[must_use]
pub fn parse_str_with_options(text: &str, options: &Options) -> Parsed {
    parse_source(text, None, options)
}

/// Parses text that came from a named source; the name is attached to
/// diagnostics. Used by the cache's read path.
pub(crate) fn parse_source(text: &str, source: Option<&str>, options: &Options) -> Parsed {
    let mut root = Value::Map(DocMap::new());
    let mut path: Vec<String> = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let Some(parsed) = line::classify(raw, line_no, source, options, &mut diagnostics) else {
            continue;
        };
        let keyed = matches!(parsed.kind, LineKind::SectionHeader | LineKind::KeyValue);
        let key = parsed.key.unwrap_or_default();

        // Path tracking. A keyed line at or beyond the current depth
        // extends the path by one key if that slot is vacant; a shallower
        // line truncates first, then gets the same chance to extend.
        if parsed.depth >= path.len() && keyed {
            if fetch_child(&root, &path, &key).is_none() {
                path.push(key.clone());
            }
        } else if parsed.depth <= path.len() {
            path.truncate(parsed.depth);
            if keyed && fetch_child(&root, &path, &key).is_none() {
                path.push(key.clone());
            }
        }

        match parsed.kind {
            LineKind::SectionHeader => {
                // Headers only move the path; a section with no children
                // leaves no node behind.
            }
            LineKind::ListItem => {
                let item = parsed.value.unwrap_or_default();
                let occupant = match fetch(&root, &path) {
                    None => None,
                    Some(Value::List(_)) => Some(true),
                    Some(_) => Some(false),
                };
                match occupant {
                    None => {
                        if assign(&mut root, &path, Value::List(vec![item])).is_err() {
                            report_duplicate(&mut diagnostics, options, line_no, source);
                        }
                    }
                    Some(true) => {
                        if let Some(Value::List(items)) = fetch_mut(&mut root, &path) {
                            items.push(item);
                        }
                    }
                    Some(false) => {
                        report_duplicate(&mut diagnostics, options, line_no, source);
                    }
                }
            }
            LineKind::KeyValue => {
                let value = parsed.value.unwrap_or_default();
                if fetch(&root, &path).is_none() {
                    if assign(&mut root, &path, value).is_err() {
                        report_duplicate(&mut diagnostics, options, line_no, source);
                    }
                } else {
                    report_duplicate(&mut diagnostics, options, line_no, source);
                }
            }
        }
    }

    let tree = match root {
        Value::Map(map) => map,
        _ => DocMap::new(),
    };
    Parsed { tree, diagnostics }
}

fn report_duplicate(
    diagnostics: &mut Vec<Diagnostic>,
    options: &Options,
    line_no: usize,
    source: Option<&str>,
) {
    line::report(
        diagnostics,
        options.logging,
        Diagnostic::at(DiagnosticKind::DuplicateInput, line_no, source),
    );
}

/// Looks up the value at `path`. The empty path resolves to the root itself,
/// which is always present. Descends through maps only.
fn fetch<'a>(root: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = root;
    for key in path {
        match current {
            Value::Map(map) => current = map.get(key)?,
            _ => return None,
        }
    }
    Some(current)
}

fn fetch_mut<'a>(root: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = root;
    for key in path {
        match current {
            Value::Map(map) => current = map.get_mut(key)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Looks up `path ++ [key]`.
fn fetch_child<'a>(root: &'a Value, path: &[String], key: &str) -> Option<&'a Value> {
    match fetch(root, path)? {
        Value::Map(map) => map.get(key),
        _ => None,
    }
}

/// Writes `value` at `path`, creating intermediate maps as needed. Fails on
/// an empty path and on any existing non-map intermediate; it never
/// overwrites existing data.
fn assign(root: &mut Value, path: &[String], value: Value) -> Result<(), ()> {
    let (last, parents) = path.split_last().ok_or(())?;
    let mut current = root;
    for key in parents {
        let Value::Map(map) = current else {
            return Err(());
        };
        if !map.contains_key(key) {
            map.insert(key.clone(), Value::Map(DocMap::new()));
        }
        let Some(next) = map.get_mut(key) else {
            return Err(());
        };
        current = next;
    }
    match current {
        Value::Map(map) => {
            map.insert(last.clone(), value);
            Ok(())
        }
        _ => Err(()),
    }
}
