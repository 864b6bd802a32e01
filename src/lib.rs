//! # yamlet
//!
//! A codec for a small indentation-based, human-editable configuration
//! format — a minimal YAML-like dialect with a typed scalar model and an
//! mtime-keyed read cache.
//!
//! ## The format
//!
//! ```text
//! name: 'Alice'           # key: value
//! server:                 # section header
//!     host: 'localhost'
//!     port: 8080
//! tags:
//!     - admin             # list items
//!     - 42
//! ```
//!
//! Scalars are JavaScript-flavored: `null`, `undefined`, `true`/`false`,
//! numbers (`parseFloat`-permissive: `5abc` is `5`), `NaN`, `Infinity`,
//! quoted strings, and `BigInt(...)` arbitrary-precision integers.
//!
//! ## Key Properties
//!
//! - **Forgiving**: malformed lines are skipped with diagnostics; a broken
//!   document loads as a partial tree, never an error
//! - **Ordered**: maps preserve first-seen key order through a parse →
//!   render round trip
//! - **Cached**: [`DocumentCache`] memoizes parses per file, keyed by
//!   modification time, so unchanged files are never re-parsed
//! - **Explicit**: configuration ([`Options`]) and filesystem access
//!   ([`SourceStore`]) are passed in; there is no global state
//!
//! ## Quick Start
//!
//! ```rust
//! use yamlet::{parse_str, to_string, Value};
//!
//! let parsed = parse_str("name: 'Alice'\ntags:\n    - admin\n    - 42");
//! assert!(parsed.diagnostics.is_empty());
//! assert_eq!(parsed.tree.get("name").and_then(|v| v.as_str()), Some("Alice"));
//!
//! // and back again
//! let text = to_string(&parsed.tree);
//! assert_eq!(parse_str(&text).tree, parsed.tree);
//! ```
//!
//! ### Reading files through the cache
//!
//! ```no_run
//! use yamlet::{DocumentCache, FsStore, Options};
//! use std::path::Path;
//!
//! let mut cache = DocumentCache::new();
//! let read = cache.read(Path::new("app.yml"), &FsStore, &Options::new())?;
//! for diagnostic in &read.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! # Ok::<(), yamlet::Error>(())
//! ```
//!
//! ### Building values with the yamlet! macro
//!
//! ```rust
//! use yamlet::{yamlet, to_string, Value};
//!
//! let doc = yamlet!({
//!     "name": "Alice",
//!     "tags": ["admin", 42]
//! });
//!
//! if let Value::Map(tree) = doc {
//!     assert_eq!(to_string(&tree), "name: 'Alice'\ntags:\n    - 'admin'\n    - 42");
//! }
//! ```
//!
//! ## Error model
//!
//! Line-level problems (bad indentation, unknown tokens, duplicate keys)
//! are [`Diagnostic`]s: collected, optionally logged via `tracing`, and the
//! line is skipped. Only filesystem failures are hard [`Error`]s.

pub mod cache;
pub mod error;
pub mod line;
pub mod macros;
pub mod map;
pub mod options;
pub mod parse;
pub mod render;
pub mod scalar;
pub mod value;

pub use cache::{CachedRead, DocumentCache, FsStore, SourceStore};
pub use error::{Diagnostic, DiagnosticKind, Error, Result};
pub use line::{LineKind, ParsedLine};
pub use map::DocMap;
pub use options::{Options, Splitter};
pub use parse::{parse_str, parse_str_with_options, Parsed};
pub use render::Rendered;
pub use value::Value;

/// Renders a tree to text with default [`Options`], discarding render
/// diagnostics.
///
/// Use [`render::render_with_options`] when you need the diagnostics or a
/// custom configuration.
///
/// # Examples
///
/// ```rust
/// use yamlet::{to_string, DocMap, Value};
///
/// let mut tree = DocMap::new();
/// tree.insert("x".to_string(), Value::Number(1.0));
/// assert_eq!(to_string(&tree), "x: 1");
/// ```
#[must_use]
pub fn to_string(tree: &DocMap) -> String {
    render::render(tree).text
}

/// Renders a tree to text with explicit [`Options`], discarding render
/// diagnostics.
#[must_use]
pub fn to_string_with_options(tree: &DocMap, options: &Options) -> String {
    render::render_with_options(tree, options).text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_to_string_round_trip() {
        let source = "name: 'Alice'\nactive: true\ntags:\n    - admin\n    - 42";
        let parsed = parse_str(source);
        assert!(parsed.diagnostics.is_empty());

        let text = to_string(&parsed.tree);
        let reparsed = parse_str(&text);
        assert_eq!(reparsed.tree, parsed.tree);
    }

    #[test]
    fn test_custom_options_round_trip() {
        let options = Options::new().with_indent(2).with_quote('"').with_logging(false);
        let source = "outer:\n  inner: \"x\"";
        let parsed = parse_str_with_options(source, &options);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(to_string_with_options(&parsed.tree, &options), source);
    }

    #[test]
    fn test_bigint_round_trip() {
        let source = "big: BigInt('123456789012345678901234567890')";
        let parsed = parse_str(source);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(
            to_string(&parsed.tree),
            "big: BigInt(123456789012345678901234567890)"
        );
    }
}
