//! Indentation-aware text buffer for generated source files.
//!
//! Every emitter writes through a [`FileBuilder`], which owns the current
//! indentation depth. Depth changes are explicit: each `inc_indent` must be
//! matched by a `dec_indent` before the buffer is finished.
//!
//! ## Examples
//!
//! ```
//! use awsgen_gen::file_builder::FileBuilder;
//!
//! let mut builder = FileBuilder::new();
//! builder.append_line("fn main() {");
//! builder.indented(|b| b.append_line("println!(\"hi\");"));
//! builder.append_line("}");
//!
//! assert_eq!(builder.finish().unwrap(), "fn main() {\n    println!(\"hi\");\n}\n");
//! ```

use crate::errors::GeneratorError;

const INDENT: &str = "    ";

/// Append-only source buffer with an explicit indentation depth.
#[derive(Debug, Default)]
pub struct FileBuilder {
    content: String,
    depth: usize,
    underflowed: bool,
}

impl FileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text`, one output line per input line, at the current depth.
    ///
    /// Blank lines are written without trailing indentation.
    pub fn append_line(&mut self, text: &str) {
        for line in text.lines() {
            if !line.trim().is_empty() {
                for _ in 0..self.depth {
                    self.content.push_str(INDENT);
                }
                self.content.push_str(line);
            }
            self.content.push('\n');
        }
    }

    pub fn append_empty_line(&mut self) {
        self.content.push('\n');
    }

    pub fn inc_indent(&mut self) {
        self.depth += 1;
    }

    /// Decreases the depth. Decreasing below zero is recorded and reported
    /// by [`FileBuilder::finish`].
    pub fn dec_indent(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => self.underflowed = true,
        }
    }

    /// Runs `f` one level deeper than the current depth.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.inc_indent();
        f(self);
        self.dec_indent();
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the buffer content.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::UnbalancedIndentation` if indentation changes
    /// were not matched.
    pub fn finish(self) -> Result<String, GeneratorError> {
        if self.depth != 0 || self.underflowed {
            return Err(GeneratorError::UnbalancedIndentation { depth: self.depth });
        }
        Ok(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_line_indents_each_line() {
        let mut builder = FileBuilder::new();
        builder.inc_indent();
        builder.append_line("match self {\n    _ => true,\n}");
        builder.dec_indent();

        assert_eq!(
            builder.finish().unwrap(),
            "    match self {\n        _ => true,\n    }\n"
        );
    }

    #[test]
    fn blank_lines_carry_no_indentation() {
        let mut builder = FileBuilder::new();
        builder.indented(|b| b.append_line("a\n\nb"));

        assert_eq!(builder.finish().unwrap(), "    a\n\n    b\n");
    }

    #[test]
    fn append_empty_line_adds_newline() {
        let mut builder = FileBuilder::new();
        builder.append_line("a");
        builder.append_empty_line();
        builder.append_line("b");

        assert_eq!(builder.finish().unwrap(), "a\n\nb\n");
    }

    #[test]
    fn nested_indentation() {
        let mut builder = FileBuilder::new();
        builder.indented(|b| {
            b.indented(|b| {
                assert_eq!(b.depth(), 2);
                b.append_line("x");
            });
        });

        assert_eq!(builder.finish().unwrap(), "        x\n");
    }

    #[test]
    fn finish_rejects_unmatched_increment() {
        let mut builder = FileBuilder::new();
        builder.inc_indent();

        assert!(matches!(
            builder.finish(),
            Err(GeneratorError::UnbalancedIndentation { depth: 1 })
        ));
    }

    #[test]
    fn finish_rejects_underflow() {
        let mut builder = FileBuilder::new();
        builder.dec_indent();
        builder.inc_indent();

        assert!(matches!(
            builder.finish(),
            Err(GeneratorError::UnbalancedIndentation { depth: 1 })
        ));
    }
}
