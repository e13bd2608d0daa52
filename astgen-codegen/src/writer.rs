//! Indentation-aware source text builder.
//!
//! Generators emit logical lines through [`CodeWriter`] instead of splicing
//! whitespace into format strings, which keeps indentation in one place.

/// One indentation step in generated Java source.
const INDENT: &str = "  ";

/// Line-oriented builder for generated source text.
#[derive(Debug, Default)]
pub struct CodeWriter {
    out: String,
    level: usize,
}

impl CodeWriter {
    /// Creates a new writer at indentation level zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line at the current indentation level.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Appends an empty line (no indentation).
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Appends a pre-rendered block verbatim.
    pub fn raw(&mut self, block: &str) {
        self.out.push_str(block);
    }

    /// Increases the indentation level by one step.
    pub fn indent(&mut self) {
        self.level += 1;
    }

    /// Decreases the indentation level by one step.
    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Consumes the writer, returning the accumulated text.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}
