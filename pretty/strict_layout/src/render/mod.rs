//! Rendering traversal.
//!
//! Linearizes a document into text given a maximum width. The traversal
//! runs over an explicit heap-allocated stack: document depth is caller
//! controlled (deeply nested syntax is normal input) and must not be bounded
//! by the native call stack. Frames are resolved strictly in order, one at a
//! time, because every group decision depends on the column left behind by
//! everything already rendered on the same line.

use tracing::trace;

use crate::emitter::{Emitter, FragmentEmitter, StringEmitter};
use crate::fits::{fits, Frame, Mode};
use strict_doc::{Document, Indent, Node};

/// Maximum line width for a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxWidth {
    /// Lines longer than this many columns break where possible.
    Columns(usize),
    /// No width constraint: only hard lines and force-break markers produce
    /// newlines.
    Unbounded,
}

impl From<usize> for MaxWidth {
    #[inline]
    fn from(columns: usize) -> Self {
        MaxWidth::Columns(columns)
    }
}

impl MaxWidth {
    /// Remaining budget for the current line, given the current column.
    ///
    /// `Unbounded` yields a saturating inexhaustible budget rather than
    /// skipping the fits check: text can never exhaust it, but a force-break
    /// marker still reports unfit, so `break_parent` breaks groups at any
    /// width.
    fn budget(self, column: usize) -> isize {
        match self {
            MaxWidth::Columns(width) => {
                isize::try_from(width).unwrap_or(isize::MAX).saturating_sub_unsigned(column)
            }
            MaxWidth::Unbounded => isize::MAX,
        }
    }
}

/// Render `doc` at `width` into an arbitrary sink.
pub fn render_to<E: Emitter>(doc: &Document, width: MaxWidth, out: &mut E) {
    let top_mode = match width {
        MaxWidth::Unbounded => Mode::Flat,
        MaxWidth::Columns(_) => Mode::Broken,
    };
    let mut column = 0usize;
    // Wrapping the document in one top-level group routes the overall
    // flat/broken decision through the same path as every nested group.
    let mut stack = vec![Frame {
        indent: 0,
        mode: top_mode,
        doc: doc.clone().group(),
    }];

    while let Some(Frame { indent, mode, doc }) = stack.pop() {
        match doc.node() {
            Node::Nil | Node::BreakParent => {}
            Node::Line => {
                out.emit_newline();
                out.emit_indent(indent);
                column = indent;
            }
            Node::Text(text) => {
                out.emit(text);
                column += text.len();
            }
            Node::Concat(left, right) => {
                stack.push(Frame {
                    indent,
                    mode,
                    doc: right.clone(),
                });
                stack.push(Frame {
                    indent,
                    mode,
                    doc: left.clone(),
                });
            }
            Node::Nest(inner, Indent::Current) => {
                // The indent is captured from the live column, not from
                // anything recorded at construction time.
                stack.push(Frame {
                    indent: column,
                    mode,
                    doc: inner.clone(),
                });
            }
            Node::Nest(inner, Indent::Spaces(spaces)) => {
                stack.push(Frame {
                    indent: indent + spaces,
                    mode,
                    doc: inner.clone(),
                });
            }
            Node::Break { unbroken, broken } => match mode {
                Mode::Flat => {
                    out.emit(unbroken);
                    column += unbroken.len();
                }
                Mode::Broken => {
                    out.emit(broken);
                    out.emit_newline();
                    out.emit_indent(indent);
                    column = indent;
                }
            },
            Node::Group(inner) => {
                let head = Frame {
                    indent,
                    mode: Mode::Flat,
                    doc: inner.clone(),
                };
                // The lookahead covers the group's content and everything
                // still queued behind it on this line.
                let flat = fits(width.budget(column), head, &stack);
                trace!(column, flat, "group layout decision");
                stack.push(Frame {
                    indent,
                    mode: if flat { Mode::Flat } else { Mode::Broken },
                    doc: inner.clone(),
                });
            }
        }
    }
}

/// Render `doc` at `width` to the ordered fragment list.
///
/// Concatenating the fragments yields the complete output; writing them to
/// a destination is the caller's responsibility.
pub fn render(doc: &Document, width: impl Into<MaxWidth>) -> Vec<String> {
    let mut out = FragmentEmitter::new();
    render_to(doc, width.into(), &mut out);
    out.into_fragments()
}

/// Render `doc` at `width` and concatenate into a single string.
pub fn format(doc: &Document, width: impl Into<MaxWidth>) -> String {
    let mut out = StringEmitter::new();
    render_to(doc, width.into(), &mut out);
    out.finish()
}
