//! Buffered string writes for generated code.

use std::io::{self, BufWriter, Write};

/// Buffering adapter over the sink a component renders into.
///
/// Generated code writes many small literals; they are coalesced here and
/// handed to the underlying sink in large chunks. Only the root of a render
/// tree, or a foreign sink, gets a new `StringWriter`: nested components are
/// handed the caller's through [`Component::render_buffered`], so their
/// output lands in the same buffer in order.
///
/// [`Component::render_buffered`]: crate::Component::render_buffered
///
/// Call [`StringWriter::finish`] on the success path to observe flush errors.
/// Dropping the writer on an early return flushes what was buffered.
pub struct StringWriter<'w> {
    inner: BufWriter<&'w mut dyn Write>,
}

impl<'w> StringWriter<'w> {
    pub fn new(writer: &'w mut dyn Write) -> Self {
        Self {
            inner: BufWriter::new(writer),
        }
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())
    }

    /// Bytes written but not yet handed to the underlying sink.
    #[inline]
    pub fn buffered(&self) -> usize {
        self.inner.buffer().len()
    }

    /// Flush buffered bytes to the underlying sink.
    pub fn finish(mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Write for StringWriter<'_> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl std::fmt::Debug for StringWriter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringWriter")
            .field("buffered", &self.buffered())
            .finish()
    }
}
