//! Single-line lookahead.
//!
//! Answers one question for the renderer: if rendering proceeded from here,
//! would the current output line stay within the remaining width? The
//! lookahead walks the pending work left to right, optimistically flattening
//! every group it meets, and short-circuits as soon as the line provably
//! ends (a hard line, a broken-mode break) or provably overflows (budget
//! exhausted, a force-break marker).

use smallvec::{smallvec, SmallVec};
use strict_doc::{Document, Indent, Node};

/// Rendering mode assigned to a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Breaks render their unbroken text; no newlines are inserted.
    Flat,
    /// Breaks render their broken text, then a newline and the ambient
    /// indent.
    Broken,
}

/// A suspended unit of rendering work.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Ambient indent applied after newlines within the subtree.
    pub indent: usize,
    /// Mode the subtree renders under.
    pub mode: Mode,
    /// The subtree itself.
    pub doc: Document,
}

/// Lookahead entries kept inline before spilling to the heap.
const LOOKAHEAD_DEPTH: usize = 16;

/// Check whether the current line fits within `budget` columns.
///
/// `head` is the frame under test and `rest` is the renderer's remaining
/// work stack (bottom to top), all of which lands on the same line unless a
/// break ends it first. The budget is signed and may start negative; every
/// subtraction saturates so an inexhaustible budget stays inexhaustible.
///
/// The ambient indent is threaded through every rule but never read here:
/// only the column budget decides whether a line fits. The threading keeps
/// suspended frames well-formed, which the renderer relies on.
pub fn fits(mut budget: isize, head: Frame, rest: &[Frame]) -> bool {
    let mut look: SmallVec<[(usize, Mode, Document); LOOKAHEAD_DEPTH]> =
        smallvec![(head.indent, head.mode, head.doc)];
    // Frames queued behind the head, in traversal order.
    let mut queued = rest.iter().rev();

    loop {
        if budget < 0 {
            return false;
        }
        let (indent, mode, doc) = match look.pop() {
            Some(entry) => entry,
            None => match queued.next() {
                Some(frame) => (frame.indent, frame.mode, frame.doc.clone()),
                None => return true,
            },
        };
        match doc.node() {
            Node::Nil => {}
            // A hard break ends the line; whatever follows is not this
            // line's problem.
            Node::Line => return true,
            Node::BreakParent => return false,
            Node::Text(text) => budget = budget.saturating_sub_unsigned(text.len()),
            Node::Break { unbroken, .. } => match mode {
                Mode::Flat => budget = budget.saturating_sub_unsigned(unbroken.len()),
                // A broken-mode break becomes a newline, ending the line.
                Mode::Broken => return true,
            },
            Node::Concat(left, right) => {
                look.push((indent, mode, right.clone()));
                look.push((indent, mode, left.clone()));
            }
            Node::Nest(inner, Indent::Current) => {
                look.push((indent, mode, inner.clone()));
            }
            Node::Nest(inner, Indent::Spaces(spaces)) => {
                look.push((indent + spaces, mode, inner.clone()));
            }
            // The lookahead always flattens groups, whatever mode the
            // renderer would ultimately assign them.
            Node::Group(inner) => look.push((indent, Mode::Flat, inner.clone())),
        }
    }
}
