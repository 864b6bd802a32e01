//! Error types for parsing, rendering, and cached file access.
//!
//! Two severities exist, and they never mix:
//!
//! - **Fatal, call-local**: [`Error`] — a missing or unreadable source file
//!   aborts the current read/write call. Surfaced as an explicit `Result`.
//! - **Recoverable, line-local**: [`Diagnostic`] — bad indentation, an
//!   unrecognized line, a bad scalar token, or a duplicate key skips the
//!   offending line and construction continues. Diagnostics are returned
//!   alongside the (possibly partial) tree.
//!
//! A malformed document degrades to a partial tree; it never fails the call.
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::{parse_str, DiagnosticKind};
//!
//! let parsed = parse_str("ok: 1\n   misindented: 2");
//! assert_eq!(parsed.diagnostics.len(), 1);
//! assert_eq!(parsed.diagnostics[0].kind, DiagnosticKind::WrongIndentation);
//! assert!(parsed.tree.contains_key("ok"));
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal error from a read or write call.
///
/// Only filesystem-level failures are fatal; everything line-shaped is a
/// [`Diagnostic`] instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file does not exist.
    #[error("source not found: {path}")]
    NotFound { path: PathBuf },

    /// Any other I/O failure while reading or writing a source.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A typed extraction from a [`Value`](crate::Value) failed.
    #[error("conversion error: {0}")]
    Conversion(String),
}

impl Error {
    /// Creates a conversion error with a display message.
    pub fn conversion<T: fmt::Display>(msg: T) -> Self {
        Error::Conversion(msg.to_string())
    }

    /// Wraps an `io::Error` for the given source path, mapping
    /// `NotFound` to its dedicated variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound { path }
        } else {
            Error::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong on a single line (or, for rendering, a single value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    /// Leading whitespace is not an exact multiple of the indent width.
    #[error("wrong number of spaces")]
    WrongIndentation,

    /// The line matches none of the recognized grammars.
    #[error("code confused")]
    ConfusedLine,

    /// The value token matches no scalar spelling (missing or wrong typing).
    #[error("confusing item (missing or wrong typing)")]
    ConfusingItem,

    /// A `BigInt(...)` literal whose inner text is not an integer.
    #[error("fatal BigInt error")]
    InvalidBigInt,

    /// A key or list item aimed at a path that is already occupied.
    #[error("duplicate input")]
    DuplicateInput,

    /// A list element with no scalar representation (nested container).
    #[error("unrenderable list item")]
    UnrenderableItem,
}

/// A non-fatal, line-local problem reported during parsing or rendering.
///
/// Carries the 1-based line number and the source identifier when known.
/// The offending line was skipped; the rest of the document was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line number. `None` for render-side diagnostics, which have
    /// no source line to point at.
    pub line: Option<usize>,
    /// Source identifier (usually a file path), when the text came from one.
    pub source: Option<String>,
}

impl Diagnostic {
    pub(crate) fn at(kind: DiagnosticKind, line: usize, source: Option<&str>) -> Self {
        Diagnostic {
            kind,
            line: Some(line),
            source: source.map(str::to_owned),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(line) = self.line {
            write!(f, " in line {}", line)?;
        }
        if let Some(source) = &self.source {
            write!(f, " of {}", source)?;
        }
        write!(f, "; skipping")
    }
}
