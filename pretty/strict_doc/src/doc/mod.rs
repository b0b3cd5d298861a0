//! Document tree and construction errors.
//!
//! A [`Document`] is a cheaply-cloneable handle over a closed [`Node`] enum.
//! Documents are plain immutable values: every builder returns a new value,
//! nothing is mutated after construction, and a document owns no external
//! resources. Cloning shares structure through a reference count; sharing is
//! semantically inert, a shared sub-document is logically duplicated at each
//! use site.

use std::rc::Rc;
use thiserror::Error;

/// Error raised for invalid document construction.
///
/// Detected eagerly, before any node is built; no partial tree is produced.
/// Rendering itself has no failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocError {
    /// Nest levels are column offsets and must be non-negative.
    #[error("nest level must be non-negative, got {0}")]
    NegativeNestLevel(i64),
}

/// Indentation applied by a [`Node::Nest`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Fixed offset in columns, added to the ambient indent.
    Spaces(usize),
    /// The column position at the moment the nest node is reached during
    /// rendering. Captured dynamically, not at construction.
    Current,
}

impl From<usize> for Indent {
    #[inline]
    fn from(spaces: usize) -> Self {
        Indent::Spaces(spaces)
    }
}

impl TryFrom<i64> for Indent {
    type Error = DocError;

    /// Convert a signed nest level, rejecting negative values.
    fn try_from(level: i64) -> Result<Self, DocError> {
        usize::try_from(level)
            .map(Indent::Spaces)
            .map_err(|_| DocError::NegativeNestLevel(level))
    }
}

/// A single node in the document tree.
///
/// The variant set is closed, so the layout engine's matches are checked for
/// exhaustiveness by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Renders nothing.
    Nil,

    /// An unconditional line break: newline plus ambient indent, in every
    /// rendering mode.
    Line,

    /// Renders nothing itself, but fails the fits check wherever it appears,
    /// forcing every enclosing group to render broken.
    BreakParent,

    /// Literal content. Layout width is the raw byte length; multi-byte
    /// characters are counted by bytes, not codepoints.
    Text(String),

    /// Ordered pair, rendered left then right.
    Concat(Document, Document),

    /// Rebinds the ambient indent for the subtree.
    Nest(Document, Indent),

    /// Breakable separator: `unbroken` in flat mode, `broken` followed by a
    /// newline and the ambient indent in broken mode.
    Break {
        /// Text emitted when the enclosing region renders flat.
        unbroken: String,
        /// Text emitted before the newline when the region renders broken.
        broken: String,
    },

    /// A region whose flat/broken decision is made atomically when the
    /// renderer reaches it.
    Group(Document),
}

/// An immutable document tree with embedded layout hints.
///
/// Cloning is cheap (reference counted), which lets the layout engine share
/// structure freely during its single-line lookahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(Rc<Node>);

impl Document {
    pub(crate) fn new(node: Node) -> Self {
        Document(Rc::new(node))
    }

    /// The node this document wraps.
    #[inline]
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// Sequential composition: `self` then `next`.
    #[must_use]
    pub fn append(self, next: impl Into<Document>) -> Self {
        Self::new(Node::Concat(self, next.into()))
    }

    /// Rebind the ambient indent for this subtree by a fixed offset.
    ///
    /// An offset of zero is an identity and returns the document unchanged.
    #[must_use]
    pub fn nest(self, spaces: usize) -> Self {
        self.nest_indent(Indent::Spaces(spaces))
    }

    /// Rebind the ambient indent for this subtree to the column position at
    /// the moment the renderer reaches it.
    #[must_use]
    pub fn nest_current(self) -> Self {
        self.nest_indent(Indent::Current)
    }

    /// Rebind the ambient indent for this subtree.
    #[must_use]
    pub fn nest_indent(self, indent: Indent) -> Self {
        match indent {
            Indent::Spaces(0) => self,
            indent => Self::new(Node::Nest(self, indent)),
        }
    }

    /// Rebind the ambient indent by a signed level.
    ///
    /// Fails fast on negative levels; no partial tree is produced.
    pub fn try_nest(self, level: i64) -> Result<Self, DocError> {
        Indent::try_from(level).map(|indent| self.nest_indent(indent))
    }

    /// Mark this subtree as one atomic flat/broken decision.
    #[must_use]
    pub fn group(self) -> Self {
        Self::new(Node::Group(self))
    }
}

impl Default for Document {
    /// The empty document.
    fn default() -> Self {
        Self::new(Node::Nil)
    }
}

impl From<Node> for Document {
    fn from(node: Node) -> Self {
        Self::new(node)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(Node::Text(text.to_owned()))
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(Node::Text(text))
    }
}

impl FromIterator<Document> for Document {
    /// Pairwise left-to-right composition; an empty iterator yields nil.
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut iter = iter.into_iter();
        match iter.next() {
            None => Self::default(),
            Some(first) => iter.fold(first, Document::append),
        }
    }
}

/// Capability for translating a value into a [`Document`].
///
/// This is the seam for external term-to-document layers (pretty-printing
/// host values, syntax trees, and so on). The core implements it only for
/// values that already are documents or plain text; richer translations live
/// entirely outside this crate.
pub trait ToDocument {
    /// Build the document describing `self`.
    fn to_document(&self) -> Document;
}

impl ToDocument for Document {
    fn to_document(&self) -> Document {
        self.clone()
    }
}

impl ToDocument for str {
    fn to_document(&self) -> Document {
        Document::from(self)
    }
}

impl ToDocument for String {
    fn to_document(&self) -> Document {
        Document::from(self.as_str())
    }
}
