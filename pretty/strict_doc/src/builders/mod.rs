//! Pure combinators for composing documents.
//!
//! Every function here returns a new [`Document`]; nothing is mutated and
//! nothing fails except the signed-nest path on [`Document::try_nest`].
//! Layout semantics (what flat and broken mode mean, how groups decide) are
//! documented on [`crate::doc::Node`] and implemented in `strict_layout`.

use crate::doc::{Document, Indent, Node};

/// The empty document. Renders nothing at any width.
pub fn nil() -> Document {
    Document::default()
}

/// A literal text fragment.
///
/// Layout width is the raw byte length of `text`.
pub fn text(text: impl Into<String>) -> Document {
    Document::new(Node::Text(text.into()))
}

/// An unconditional line break: newline plus ambient indent, in every mode.
pub fn line() -> Document {
    Document::new(Node::Line)
}

/// A breakable separator.
///
/// Renders as `unbroken` when the enclosing region is flat, and as `broken`
/// followed by a newline and the ambient indent when it is broken. The plain
/// breakable space is `break_(" ", "")`.
///
/// The trailing underscore keeps clear of the `break` keyword.
pub fn break_(unbroken: impl Into<String>, broken: impl Into<String>) -> Document {
    Document::new(Node::Break {
        unbroken: unbroken.into(),
        broken: broken.into(),
    })
}

/// Force every enclosing group to render broken, at any width.
///
/// Contributes no text of its own.
pub fn break_parent() -> Document {
    Document::new(Node::BreakParent)
}

/// Sequential composition of any number of documents.
///
/// Folds pairwise left to right; an empty iterator yields [`nil`].
pub fn concat(docs: impl IntoIterator<Item = Document>) -> Document {
    docs.into_iter().collect()
}

/// Rebind the ambient indent for `doc` by a fixed offset.
///
/// An offset of zero returns `doc` unchanged. Column-relative nesting goes
/// through [`Indent::Current`].
pub fn nest(doc: Document, indent: impl Into<Indent>) -> Document {
    doc.nest_indent(indent.into())
}

/// Mark `doc` as one atomic flat/broken decision.
pub fn group(doc: Document) -> Document {
    doc.group()
}

/// Join `a` and `b` with a breakable space: a space when flat, a newline
/// when broken.
pub fn glue(a: impl Into<Document>, b: impl Into<Document>) -> Document {
    glue_with(a, " ", b)
}

/// Join `a` and `b` with a breakable separator that disappears when broken.
pub fn glue_with(
    a: impl Into<Document>,
    separator: impl Into<String>,
    b: impl Into<Document>,
) -> Document {
    a.into().append(break_(separator, "").append(b.into()))
}

/// Wrap `doc` in delimiters that break together with their contents.
///
/// The contents nest by exactly one column and the whole is one group, so
/// the delimiters and the inner document are a single flat/broken decision.
pub fn surround(
    open: impl Into<Document>,
    doc: impl Into<Document>,
    close: impl Into<Document>,
) -> Document {
    open.into()
        .append(doc.into().nest(1).append(close.into()))
        .group()
}

/// Delimit a rendered collection, comma-separating the items.
///
/// An empty collection yields the delimiters flush against each other, with
/// no group and no break opportunity. Otherwise each item is rendered with
/// `render_item`, the comma sits flush after its element with a breakable
/// space before the next, and the whole goes through [`surround`]. The
/// closing delimiter always stays flush against the last element.
pub fn surround_many<T, F>(
    open: impl Into<Document>,
    items: &[T],
    close: impl Into<Document>,
    mut render_item: F,
) -> Document
where
    F: FnMut(&T) -> Document,
{
    let mut iter = items.iter();
    let Some(first) = iter.next() else {
        return open.into().append(close.into());
    };
    let joined = iter.fold(render_item(first), |joined, item| {
        joined
            .append(text(","))
            .append(break_(" ", ""))
            .append(render_item(item))
    });
    surround(open, joined, close)
}

#[cfg(test)]
mod tests;
