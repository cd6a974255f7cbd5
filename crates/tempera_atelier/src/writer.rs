//! Position-tracking output writer.

use std::io;

use tempera_relief::{Position, Range};

/// One indentation unit of generated code.
pub const INDENT: &str = "    ";

/// Writes generated code and tracks the cursor, so every write knows the
/// range it occupies in the output.
#[derive(Debug)]
pub struct RangeWriter<W: io::Write> {
    inner: W,
    position: Position,
}

impl<W: io::Write> RangeWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            position: Position::default(),
        }
    }

    /// Current cursor.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Append `text`, returning the range it was written to.
    pub fn write(&mut self, text: &str) -> io::Result<Range> {
        let from = self.position;
        self.inner.write_all(text.as_bytes())?;
        self.position.advance(text);
        Ok(Range::new(from, self.position))
    }

    /// Append `level` indentation units followed by `text`, returning the
    /// range of `text` alone.
    pub fn write_indent(&mut self, level: usize, text: &str) -> io::Result<Range> {
        for _ in 0..level {
            self.write(INDENT)?;
        }
        self.write(text)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
