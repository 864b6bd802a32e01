//! Tree-to-text rendering.
//!
//! Walks a [`DocMap`] in insertion order and emits the line-oriented text
//! form: one line per key, nested maps indented one level deeper, list
//! items one per line with a `- ` prefix.
//!
//! Two formatting rules worth knowing:
//!
//! - Key lines are indented by the configured indent width per level, but
//!   list items always use a fixed 4-column unit. The discrepancy is
//!   inherited from the reference behavior and kept so that existing files
//!   do not reformat.
//! - In grammar mode, container keys get a trailing colon and scalars are
//!   emitted as `key: value`, which is exactly what the parser reads back.
//!   In literal-splitter mode the configured splitter joins key and value
//!   instead.
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::parse_str;
//!
//! let parsed = parse_str("name: 'Alice'\ntags:\n    - admin\n    - 42");
//! let rendered = yamlet::render::render(&parsed.tree);
//! assert_eq!(rendered.text, "name: 'Alice'\ntags:\n    - 'admin'\n    - 42");
//! assert_eq!(parse_str(&rendered.text).tree, parsed.tree);
//! ```

use crate::error::{Diagnostic, DiagnosticKind};
use crate::line;
use crate::scalar;
use crate::{DocMap, Options, Splitter, Value};

/// Indent unit for list items. Fixed at four columns no matter what
/// `Options::indent` says; see the module docs.
const LIST_INDENT: &str = "    ";

/// The outcome of rendering: the text plus any non-fatal diagnostics
/// (currently only nested containers inside lists, which have no textual
/// form and fall back to their `Display` rendering).
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Renders a tree with default [`Options`].
#[must_use]
pub fn render(map: &DocMap) -> Rendered {
    render_with_options(map, &Options::default())
}

/// Renders a tree with explicit [`Options`].
///
/// Lines are newline-joined with no trailing newline.
#[must_use]
pub fn render_with_options(map: &DocMap, options: &Options) -> Rendered {
    let mut rendered = Rendered {
        text: String::with_capacity(256),
        diagnostics: Vec::new(),
    };
    render_map(map, 0, options, &mut rendered);
    rendered
}

fn render_map(map: &DocMap, depth: usize, options: &Options, out: &mut Rendered) {
    for (key, value) in map {
        if !out.text.is_empty() {
            out.text.push('\n');
        }
        for _ in 0..depth * options.indent {
            out.text.push(' ');
        }
        out.text.push_str(key);

        match value {
            Value::List(items) => {
                finish_key(options, None, out);
                for item in items {
                    out.text.push('\n');
                    for _ in 0..=depth {
                        out.text.push_str(LIST_INDENT);
                    }
                    out.text.push_str("- ");
                    if !item.is_scalar() {
                        line::report(
                            &mut out.diagnostics,
                            options.logging,
                            Diagnostic {
                                kind: DiagnosticKind::UnrenderableItem,
                                line: None,
                                source: None,
                            },
                        );
                    }
                    out.text.push_str(&scalar::encode(item, options.quote));
                }
            }
            Value::Map(nested) => {
                finish_key(options, None, out);
                render_map(nested, depth + 1, options, out);
            }
            scalar => {
                finish_key(options, Some(scalar), out);
            }
        }
    }
}

/// Completes a key line: `key:` for containers and `key: value` for scalars
/// in grammar mode, `key<splitter>value` in literal-splitter mode (where
/// container keys stay bare — that grammar has no header form).
fn finish_key(options: &Options, scalar_value: Option<&Value>, out: &mut Rendered) {
    match (&options.splitter, scalar_value) {
        (Splitter::Grammar, None) => out.text.push(':'),
        (Splitter::Grammar, Some(value)) => {
            out.text.push_str(": ");
            out.text.push_str(&scalar::encode(value, options.quote));
        }
        (Splitter::Literal(_), None) => {}
        (Splitter::Literal(sep), Some(value)) => {
            out.text.push_str(sep);
            out.text.push_str(&scalar::encode(value, options.quote));
        }
    }
}
