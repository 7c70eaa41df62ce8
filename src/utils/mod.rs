//! Shared utility functions.
//!
//! - [`size`] - Sizing inputs to get the total a bar counts towards
//!
//! ```rust,no_run
//! use linebar::utils::total_size;
//!
//! # fn example() -> linebar::Result<()> {
//! let total = total_size(&["a.osm", "b.osm"])?;
//! println!("Reading {} bytes", total);
//! # Ok(())
//! # }
//! ```

pub mod size;

pub use size::{file_size, total_size};
