//! Line Reader
//!
//! Reads one logical line at a time from a buffered stream, gluing
//! together lines the stream hands out in several chunks.

use std::io::{self, BufRead};

use bytes::BytesMut;

use crate::config::MAX_BUFFER_CAPACITY;

/// Reads complete lines into a growable buffer
///
/// The buffer starts at the requested capacity and grows to fit the
/// longest line seen.
pub struct LineReader<R> {
    /// Underlying buffered stream
    inner: R,

    /// Current line, without its terminator
    buffer: BytesMut,
}

impl<R: BufRead> LineReader<R> {
    /// Create a reader with an initial buffer capacity
    ///
    /// The initial allocation is capped at [`MAX_BUFFER_CAPACITY`]; longer
    /// lines still grow the buffer as needed.
    pub fn new(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            buffer: BytesMut::with_capacity(capacity.min(MAX_BUFFER_CAPACITY)),
        }
    }

    /// Read the next logical line
    ///
    /// Returns `true` when the end of the stream was reached while producing
    /// this line. The final line is still valid data in that case, even
    /// without a trailing newline. A stream ending in `\n` yields one last
    /// empty line flagged as end of stream.
    pub fn read_line(&mut self) -> io::Result<bool> {
        self.buffer.clear();

        loop {
            let (found_newline, used) = {
                let available = match self.inner.fill_buf() {
                    Ok(chunk) => chunk,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };

                if available.is_empty() {
                    return Ok(true);
                }

                match available.iter().position(|&b| b == b'\n') {
                    Some(pos) => {
                        self.buffer.extend_from_slice(&available[..pos]);
                        (true, pos + 1)
                    }
                    None => {
                        self.buffer.extend_from_slice(available);
                        (false, available.len())
                    }
                }
            };

            self.inner.consume(used);

            if found_newline {
                if self.buffer.last() == Some(&b'\r') {
                    self.buffer.truncate(self.buffer.len() - 1);
                }
                return Ok(false);
            }
        }
    }

    /// Raw bytes of the current line
    pub fn line(&self) -> &[u8] {
        &self.buffer
    }

    /// Current line as UTF-8
    pub fn line_str(&self) -> io::Result<&str> {
        std::str::from_utf8(&self.buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Current buffer capacity
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}
