use super::*;
use pretty_assertions::assert_eq;

// === StringEmitter ===

#[test]
fn string_emitter_starts_empty() {
    let out = StringEmitter::new();
    assert!(out.is_empty());
    assert_eq!(out.as_str(), "");
}

#[test]
fn string_emitter_builds_in_order() {
    let mut out = StringEmitter::new();
    out.emit("a");
    out.emit_newline();
    out.emit_indent(2);
    out.emit("b");
    assert_eq!(out.finish(), "a\n  b");
}

#[test]
fn string_emitter_with_capacity_is_still_empty() {
    let out = StringEmitter::with_capacity(64);
    assert!(out.is_empty());
}

#[test]
fn string_emitter_zero_indent_emits_nothing() {
    let mut out = StringEmitter::new();
    out.emit_indent(0);
    assert!(out.is_empty());
}

// === FragmentEmitter ===

#[test]
fn fragment_emitter_collects_in_order() {
    let mut out = FragmentEmitter::new();
    out.emit("hello");
    out.emit_newline();
    out.emit_indent(3);
    out.emit("world");
    assert_eq!(out.into_fragments(), vec!["hello", "\n", "   ", "world"]);
}

#[test]
fn fragment_emitter_skips_empty_fragments() {
    let mut out = FragmentEmitter::new();
    out.emit("");
    out.emit_indent(0);
    assert!(out.fragments().is_empty());
}

#[test]
fn fragments_concatenate_to_string_output() {
    let mut frags = FragmentEmitter::new();
    let mut string = StringEmitter::new();
    for out in [&mut frags as &mut dyn Emitter, &mut string] {
        out.emit("x");
        out.emit("");
        out.emit_newline();
        out.emit_indent(4);
        out.emit("y");
    }
    assert_eq!(frags.into_fragments().concat(), string.finish());
}
