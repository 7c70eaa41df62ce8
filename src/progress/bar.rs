//! The single-line progress bar.
//!
//! [`ProgressBar`] tracks how much of a known total has been processed and
//! redraws one line on stderr whenever the integer percentage changes.
//!
//! # Examples
//!
//! ## Reading a single input
//!
//! ```rust,no_run
//! use linebar::ProgressBar;
//!
//! # fn example() -> linebar::Result<()> {
//! let mut bar = ProgressBar::new(4096, true);
//! bar.update(1024)?;
//! bar.update(4096)?;
//! bar.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Several inputs sharing one bar
//!
//! ```rust,no_run
//! use linebar::ProgressBar;
//!
//! # fn example() -> linebar::Result<()> {
//! let mut bar = ProgressBar::new(300, true);
//! bar.update(50)?;
//! bar.file_done(100)?;
//! bar.update(200)?;
//! bar.file_done(200)?;
//! // Dropping the bar finishes it if `finish` was not called.
//! # Ok(())
//! # }
//! ```

use super::reader::ProgressReader;
use super::render::{blank_line, percent_of, render_line, SENTINEL_PERCENT};
use crate::Result;

use std::io::{self, Read, Stderr, Write};
use tracing::{debug, trace};

/// A progress bar drawn in place on a single line.
///
/// Output goes to stderr unless another writer is supplied through
/// [`ProgressBar::with_writer`]. The bar is not synchronized; callers updating
/// it from several threads must serialize access themselves.
pub struct ProgressBar<W: Write = Stderr> {
    /// Total work equivalent to 100%.
    max_size: u64,
    /// Work from segments already finished.
    done_size: u64,
    /// Work done within the current segment.
    current_size: u64,
    /// Percentage shown by the last render.
    last_percent: u64,
    enabled: bool,
    /// Cleared by `finish`, so `Drop` does not finish twice.
    needs_cleanup: bool,
    writer: W,
}

impl ProgressBar<Stderr> {
    /// Create a bar rendering to stderr. Nothing is drawn until the first update.
    ///
    /// The bar stays disabled when `max_size` is zero, whatever `enable` says.
    pub fn new(max_size: u64, enable: bool) -> Self {
        Self::with_writer(max_size, enable, io::stderr())
    }
}

impl<W: Write> ProgressBar<W> {
    /// Create a bar rendering to `writer`.
    pub fn with_writer(max_size: u64, enable: bool, writer: W) -> Self {
        Self {
            max_size,
            done_size: 0,
            current_size: 0,
            last_percent: SENTINEL_PERCENT,
            enabled: enable && max_size > 0,
            needs_cleanup: true,
            writer,
        }
    }

    /// Set the progress within the current segment and redraw if needed.
    pub fn update(&mut self, current_size: u64) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.current_size = current_size;
        self.display()
    }

    /// Record a finished segment of `segment_size` and start a new one at zero.
    pub fn file_done(&mut self, segment_size: u64) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.done_size = self.done_size.saturating_add(segment_size);
        self.current_size = 0;
        self.display()
    }

    /// Draw 100% and move to the next line.
    ///
    /// Only the first call has an effect.
    pub fn finish(&mut self) -> Result<()> {
        if !self.needs_cleanup {
            return Ok(());
        }
        self.needs_cleanup = false;
        if !self.enabled {
            return Ok(());
        }

        self.done_size = self.max_size;
        self.current_size = 0;
        self.display()?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        debug!("Progress bar finished at {} units", self.max_size);
        Ok(())
    }

    /// Blank out the bar so other output can be written to the same stream.
    ///
    /// The next [`update`](Self::update) redraws even if the percentage did
    /// not change.
    pub fn erase(&mut self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.writer.write_all(blank_line().as_bytes())?;
        self.writer.flush()?;
        self.last_percent = SENTINEL_PERCENT;
        Ok(())
    }

    /// Wrap a reader so every read advances the current segment.
    pub fn wrap_read<R: Read>(&mut self, reader: R) -> ProgressReader<'_, R, W> {
        ProgressReader::new(reader, self)
    }

    /// Total work equivalent to 100%.
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Work from finished segments.
    pub fn done_size(&self) -> u64 {
        self.done_size
    }

    /// Work within the current segment.
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    /// Percentage the next render would show, or `None` when disabled.
    pub fn percent(&self) -> Option<u64> {
        self.enabled.then(|| {
            percent_of(
                self.done_size.saturating_add(self.current_size),
                self.max_size,
            )
        })
    }

    /// Whether the bar draws anything at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the underlying writer.
    ///
    /// Writing to it while the bar is visible corrupts the line; call
    /// [`erase`](Self::erase) first.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    fn display(&mut self) -> Result<()> {
        let percent = percent_of(
            self.done_size.saturating_add(self.current_size),
            self.max_size,
        );
        if percent == self.last_percent {
            return Ok(());
        }
        self.last_percent = percent;

        trace!("Rendering progress at {}%", percent);
        self.writer.write_all(render_line(percent).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for ProgressBar<W> {
    fn drop(&mut self) {
        if !self.needs_cleanup {
            return;
        }
        if let Err(e) = self.finish() {
            debug!("Ignoring error while finishing progress bar on drop: {}", e);
        }
    }
}

impl<W: Write> std::fmt::Debug for ProgressBar<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBar")
            .field("max_size", &self.max_size)
            .field("done_size", &self.done_size)
            .field("current_size", &self.current_size)
            .field("last_percent", &self.last_percent)
            .field("enabled", &self.enabled)
            .field("needs_cleanup", &self.needs_cleanup)
            .finish()
    }
}
