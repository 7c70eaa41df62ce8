//! Progress module containing the progress bar and its helpers.
//!
//! # Overview
//!
//! - `bar` - The [`ProgressBar`] itself
//! - `render` - Pure formatting of the progress line
//! - `builder` - [`ProgressBarBuilder`] and [`ProgressConfig`]
//! - `reader` - [`ProgressReader`], an `io::Read` adapter driving a bar
//!
//! # Examples
//!
//! ```rust
//! use linebar::progress::ProgressBar;
//!
//! # fn example() -> linebar::Result<()> {
//! let mut bar = ProgressBar::with_writer(200, true, Vec::new());
//! bar.update(100)?;
//! bar.finish()?;
//! assert!(bar.get_ref().ends_with(b"100% \r\n"));
//! # Ok(())
//! # }
//! ```

pub(crate) mod bar;
pub(crate) mod builder;
pub(crate) mod reader;
pub mod render;

pub use bar::ProgressBar;
pub use builder::{ProgressBarBuilder, ProgressConfig};
pub use reader::ProgressReader;
