//! Builder and configuration for [`ProgressBar`] instances.
//!
//! # Examples
//!
//! ## Sizing the bar from input files
//!
//! ```rust,no_run
//! use linebar::ProgressBarBuilder;
//!
//! # fn example() -> linebar::Result<()> {
//! let bar = ProgressBarBuilder::new()
//!     .files(&["planet.osm.pbf", "extract.osm.pbf"])?
//!     .build();
//! # Ok(())
//! # }
//! ```
//!
//! ## Disabled bar
//!
//! ```rust
//! use linebar::ProgressBarBuilder;
//!
//! let bar = ProgressBarBuilder::hidden().max_size(100).build();
//! assert!(!bar.is_enabled());
//! ```

use super::bar::ProgressBar;
use crate::utils::total_size;
use crate::Result;

use std::io::{Stderr, Write};
use std::path::Path;

/// Settings a [`ProgressBar`] is created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Total work equivalent to 100%.
    pub max_size: u64,
    /// Draw the bar at all. Callers usually pass whether stderr is a terminal.
    pub enabled: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            max_size: 0,
            enabled: true,
        }
    }
}

impl ProgressConfig {
    /// Return `true` if a bar built from this config would draw anything.
    pub fn is_active(&self) -> bool {
        self.enabled && self.max_size > 0
    }
}

/// A builder used to create a [`ProgressBar`].
///
/// ```rust
/// use linebar::ProgressBarBuilder;
///
/// let bar = ProgressBarBuilder::new()
///     .max_size(1024)
///     .build_with_writer(Vec::new());
/// assert_eq!(bar.max_size(), 1024);
/// ```
#[derive(Debug, Default)]
pub struct ProgressBarBuilder {
    config: ProgressConfig,
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressBarBuilder::default()
    }

    /// Convenience function for a bar that never draws.
    pub fn hidden() -> Self {
        let mut builder = ProgressBarBuilder::default();
        builder.config.enabled = false;
        builder
    }

    /// Set the total work equivalent to 100%.
    pub fn max_size(mut self, max_size: u64) -> Self {
        self.config.max_size = max_size;
        self
    }

    /// Enable or disable drawing.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Set the total to the combined size of `paths`.
    pub fn files<P: AsRef<Path>>(mut self, paths: &[P]) -> Result<Self> {
        self.config.max_size = total_size(paths)?;
        Ok(self)
    }

    /// Get a reference to the configuration being built.
    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Create the [`ProgressBar`] rendering to stderr.
    pub fn build(self) -> ProgressBar<Stderr> {
        ProgressBar::new(self.config.max_size, self.config.enabled)
    }

    /// Create the [`ProgressBar`] rendering to `writer`.
    pub fn build_with_writer<W: Write>(self, writer: W) -> ProgressBar<W> {
        ProgressBar::with_writer(self.config.max_size, self.config.enabled, writer)
    }
}

impl From<ProgressConfig> for ProgressBarBuilder {
    fn from(config: ProgressConfig) -> Self {
        Self { config }
    }
}
