//! Strictly-Pretty Layout Engine
//!
//! Renders a [`strict_doc::Document`] into concrete lines that respect a
//! maximum width, choosing where to break with a single-line lookahead.
//!
//! # Algorithm
//!
//! The renderer walks the document with an explicit work stack, tracking the
//! current column. When it reaches a group it runs the fits check: would the
//! rest of the current line, rendered with every lookahead group flat, stay
//! within the remaining width? The lookahead deliberately covers not just
//! the group's own content but **everything queued after it** on the same
//! line, so a tight-fitting group followed by a long trailing fragment is
//! still forced to break. The decision commits the group to flat or broken
//! mode and is never revisited; it is re-made at every encounter because it
//! depends on the ambient column.
//!
//! Rendering never fails. When nothing fits, output simply overflows the
//! requested width.
//!
//! # Modules
//!
//! - [`emitter`]: output sinks (string and fragment accumulation)
//! - [`fits`]: the single-line lookahead predicate
//! - [`render`]: the rendering traversal and entry points

pub mod emitter;
pub mod fits;
pub mod render;

pub use emitter::{Emitter, FragmentEmitter, StringEmitter};
pub use render::{format, render, render_to, MaxWidth};
