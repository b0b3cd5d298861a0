//! Strictly-Pretty Document Model
//!
//! Defines the immutable [`Document`] tree that the layout engine in
//! `strict_layout` renders to width-constrained text. A document describes
//! *what* to print plus embedded layout hints: where a line may break, which
//! regions break atomically, and how nested content indents.
//!
//! The node grammar follows Lindig's "strictly pretty" documents with three
//! extensions:
//!
//! - nesting relative to the current column ([`Indent::Current`]), not just
//!   fixed offsets
//! - breakable separators with distinct flat and broken literal text
//!   ([`Node::Break`])
//! - a force-break marker that propagates upward through enclosing groups
//!   ([`Node::BreakParent`])
//!
//! # Modules
//!
//! - [`doc`]: the [`Document`] handle, node grammar, and construction errors
//! - [`builders`]: pure combinators for composing documents

pub mod builders;
pub mod doc;

pub use builders::{
    break_, break_parent, concat, glue, glue_with, group, line, nest, nil, surround,
    surround_many, text,
};
pub use doc::{DocError, Document, Indent, Node, ToDocument};
