//! Configuration for parsing and rendering.
//!
//! This module provides:
//!
//! - [`Options`]: the configuration value passed explicitly into every
//!   parse/render call (there is no global state)
//! - [`Splitter`]: choice between the default colon/dash grammar and a
//!   literal key/value delimiter substring
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::{parse_str_with_options, Options, Splitter};
//!
//! // Semicolon comments, 2-space indentation
//! let options = Options::new().with_comment(';').with_indent(2);
//! let parsed = parse_str_with_options("host: 'db' ; primary", &options);
//! assert_eq!(parsed.tree.get("host").and_then(|v| v.as_str()), Some("db"));
//!
//! // Literal-splitter grammar: "key = value"
//! let options = Options::new().with_splitter(Splitter::literal(" = "));
//! let parsed = parse_str_with_options("port = 8080", &options);
//! assert_eq!(parsed.tree.get("port").and_then(|v| v.as_f64()), Some(8080.0));
//! ```

/// Grammar selection for key/value lines.
///
/// The default grammar recognizes `key:` section headers, `- item` list
/// items, and `key: value` pairs. A literal splitter replaces all of that
/// with a single rule: split the line on the given substring.
///
/// # Examples
///
/// ```rust
/// use yamlet::Splitter;
///
/// assert_eq!(Splitter::default(), Splitter::Grammar);
/// assert!(Splitter::literal("=").is_literal());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Splitter {
    /// The default colon/dash grammar.
    #[default]
    Grammar,
    /// Split every non-blank line on this literal substring; the first
    /// segment is the key, the remaining segments (empties dropped) are
    /// concatenated into the value token.
    Literal(String),
}

impl Splitter {
    /// Creates a literal splitter from any string-like value.
    #[must_use]
    pub fn literal(separator: impl Into<String>) -> Self {
        Splitter::Literal(separator.into())
    }

    /// Returns `true` if this is a literal splitter.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Splitter::Literal(_))
    }
}

/// Configuration options for parsing and rendering.
///
/// Passed by reference into every call; callers own the lifetime and scope
/// of their configuration instead of mutating process-wide state.
///
/// # Examples
///
/// ```rust
/// use yamlet::{Options, Splitter};
///
/// // Defaults: '#' comments, 4-column indent, grammar mode, "'" quotes
/// let options = Options::new();
///
/// // Custom configuration
/// let options = Options::new()
///     .with_comment(';')
///     .with_indent(2)
///     .with_quote('"')
///     .with_logging(false);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Comment leader; everything from its first occurrence is stripped.
    pub comment: char,
    /// When `true`, every diagnostic is also emitted as a `tracing` warning.
    pub logging: bool,
    /// Indent width in columns. Depth = leading columns / width, exactly.
    pub indent: usize,
    /// Line grammar; see [`Splitter`].
    pub splitter: Splitter,
    /// Quote character used when encoding strings. Decoding always accepts
    /// both `'` and `"` regardless of this setting.
    pub quote: char,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            comment: '#',
            logging: true,
            indent: 4,
            splitter: Splitter::default(),
            quote: '\'',
        }
    }
}

impl Options {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Options;
    ///
    /// let options = Options::new();
    /// assert_eq!(options.comment, '#');
    /// assert_eq!(options.indent, 4);
    /// assert!(options.logging);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment leader character.
    #[must_use]
    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = comment;
        self
    }

    /// Enables or disables diagnostic logging via `tracing`.
    ///
    /// Diagnostics are always collected and returned; this only controls
    /// whether they are additionally logged.
    #[must_use]
    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    /// Sets the indent width in columns.
    ///
    /// Note: list items always render at a fixed 4-column unit regardless of
    /// this setting, matching the format's reference behavior.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the line grammar.
    #[must_use]
    pub fn with_splitter(mut self, splitter: Splitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Sets the quote character used when encoding strings.
    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }
}
