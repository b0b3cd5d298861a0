//! Output sinks for the renderer.
//!
//! Rendering is generic over an [`Emitter`], so callers decide where the
//! text goes. This crate ships two in-memory sinks: [`StringEmitter`] for a
//! single concatenated string and [`FragmentEmitter`] for the ordered
//! fragment list. Writing to a console or file stays outside this crate.

/// Sink for rendered output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit `spaces` columns of indentation.
    fn emit_indent(&mut self, spaces: usize);
}

/// In-memory emitter producing one string.
#[derive(Debug, Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// The output emitted so far, without consuming the emitter.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the emitter and return the rendered string.
    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, spaces: usize) {
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }
}

/// Emitter accumulating the ordered fragment list.
///
/// Concatenating the fragments reproduces the [`StringEmitter`] output
/// exactly. Empty fragments (empty text, zero-column indents) are skipped.
#[derive(Debug, Default)]
pub struct FragmentEmitter {
    fragments: Vec<String>,
}

impl FragmentEmitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fragments emitted so far.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Consume the emitter and return the fragment list.
    pub fn into_fragments(self) -> Vec<String> {
        self.fragments
    }
}

impl Emitter for FragmentEmitter {
    fn emit(&mut self, text: &str) {
        if !text.is_empty() {
            self.fragments.push(text.to_owned());
        }
    }

    fn emit_newline(&mut self) {
        self.fragments.push("\n".to_owned());
    }

    fn emit_indent(&mut self, spaces: usize) {
        if spaces > 0 {
            self.fragments.push(" ".repeat(spaces));
        }
    }
}

#[cfg(test)]
mod tests;
