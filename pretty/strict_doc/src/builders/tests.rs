use super::*;
use pretty_assertions::assert_eq;

// === Leaves ===

#[test]
fn nil_is_the_empty_node() {
    assert_eq!(nil().node(), &Node::Nil);
}

#[test]
fn text_carries_its_contents() {
    assert_eq!(text("abc").node(), &Node::Text("abc".to_owned()));
}

#[test]
fn line_is_the_hard_break() {
    assert_eq!(line().node(), &Node::Line);
}

#[test]
fn break_carries_both_renderings() {
    let doc = break_(", ", ",");
    assert_eq!(
        doc.node(),
        &Node::Break {
            unbroken: ", ".to_owned(),
            broken: ",".to_owned(),
        }
    );
}

#[test]
fn break_parent_is_the_force_break_marker() {
    assert_eq!(break_parent().node(), &Node::BreakParent);
}

// === Concat ===

#[test]
fn concat_of_nothing_is_nil() {
    assert_eq!(concat(std::iter::empty()), nil());
}

#[test]
fn concat_of_one_is_that_document() {
    assert_eq!(concat([text("x")]), text("x"));
}

#[test]
fn concat_folds_pairwise_left_to_right() {
    let folded = concat([text("a"), text("b"), text("c")]);
    let by_hand = text("a").append(text("b")).append(text("c"));
    assert_eq!(folded, by_hand);
}

// === Nest / Group ===

#[test]
fn nest_zero_is_identity() {
    assert_eq!(nest(text("x"), 0), text("x"));
}

#[test]
fn nest_fixed_offset() {
    assert!(matches!(
        nest(text("x"), 4).node(),
        Node::Nest(_, Indent::Spaces(4))
    ));
}

#[test]
fn nest_current_column() {
    assert!(matches!(
        nest(text("x"), Indent::Current).node(),
        Node::Nest(_, Indent::Current)
    ));
}

#[test]
fn group_wraps() {
    assert_eq!(group(text("x")), text("x").group());
}

// === Glue ===

#[test]
fn glue_is_a_breakable_space() {
    let doc = glue(text("a"), text("b"));
    let expected = text("a").append(break_(" ", "").append(text("b")));
    assert_eq!(doc, expected);
}

#[test]
fn glue_with_custom_separator() {
    let doc = glue_with(text("a"), ", ", text("b"));
    let expected = text("a").append(break_(", ", "").append(text("b")));
    assert_eq!(doc, expected);
}

#[test]
fn glue_accepts_plain_text() {
    assert_eq!(glue("a", "b"), glue(text("a"), text("b")));
}

// === Surround ===

#[test]
fn surround_groups_delimiters_with_contents() {
    let doc = surround("[", text("x"), "]");
    let expected = text("[")
        .append(text("x").nest(1).append(text("]")))
        .group();
    assert_eq!(doc, expected);
}

#[test]
fn surround_many_empty_has_no_break_opportunity() {
    let doc = surround_many("[", &[] as &[i32], "]", |_| nil());
    // Delimiters flush together: no group, no nest.
    assert_eq!(doc, text("[").append(text("]")));
}

#[test]
fn surround_many_single_item() {
    let doc = surround_many("[", &[7], "]", |n| text(n.to_string()));
    assert_eq!(doc, surround("[", text("7"), "]"));
}

#[test]
fn surround_many_joins_with_flush_commas() {
    let doc = surround_many("[", &[1, 2, 3], "]", |n| text(n.to_string()));
    let joined = text("1")
        .append(text(","))
        .append(break_(" ", ""))
        .append(text("2"))
        .append(text(","))
        .append(break_(" ", ""))
        .append(text("3"));
    assert_eq!(doc, surround("[", joined, "]"));
}
