//! Linebar draws a single-line progress bar on stderr and updates it in
//! place while a long-running read advances.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use linebar::ProgressBar;
//!
//! # fn main() -> Result<(), linebar::Error> {
//! let mut bar = ProgressBar::new(1_000_000, true);
//! for done in (0..=1_000_000).step_by(10_000) {
//!     bar.update(done)?;
//! }
//! bar.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`progress`] - The progress bar, its builder, rendering and reader adapter
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions

pub mod error;
pub mod progress;
pub mod utils;

pub use error::{Error, Result};
pub use progress::{ProgressBar, ProgressBarBuilder, ProgressConfig, ProgressReader};
pub use utils::{file_size, total_size};
