//! Reader adapter feeding a [`ProgressBar`].
//!
//! ```rust
//! use linebar::ProgressBar;
//! use std::io::Read;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let data = vec![0u8; 1000];
//! let mut bar = ProgressBar::with_writer(data.len() as u64, true, Vec::new());
//!
//! let mut reader = bar.wrap_read(data.as_slice());
//! let mut sink = Vec::new();
//! reader.read_to_end(&mut sink)?;
//! let read = reader.segment_done()?;
//!
//! assert_eq!(read, 1000);
//! assert_eq!(bar.percent(), Some(100));
//! # Ok(())
//! # }
//! ```

use super::bar::ProgressBar;
use crate::Result;

use std::io::{self, Read, Write};
use tracing::debug;

/// Wraps a reader and reports the bytes read as progress of the current segment.
///
/// Failures to draw the bar never interrupt reading.
pub struct ProgressReader<'a, R, W: Write> {
    inner: R,
    bar: &'a mut ProgressBar<W>,
    bytes_read: u64,
}

impl<'a, R: Read, W: Write> ProgressReader<'a, R, W> {
    pub(crate) fn new(inner: R, bar: &'a mut ProgressBar<W>) -> Self {
        Self {
            inner,
            bar,
            bytes_read: 0,
        }
    }

    /// Bytes read so far from this segment.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Get a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Close the segment, adding its bytes to the finished total.
    ///
    /// Returns the number of bytes the segment contributed.
    pub fn segment_done(self) -> Result<u64> {
        self.bar.file_done(self.bytes_read)?;
        Ok(self.bytes_read)
    }
}

impl<R: Read, W: Write> Read for ProgressReader<'_, R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.bytes_read += n as u64;
            // Bytes are already in `buf`; a failed draw must not lose them.
            if let Err(e) = self.bar.update(self.bytes_read) {
                debug!("Ignoring error while drawing progress bar: {}", e);
            }
        }
        Ok(n)
    }
}
