//! Input size helpers.

use crate::{Error, Result};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Size in bytes of the file at `path`.
pub fn file_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|source| Error::Metadata {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(metadata.len())
}

/// Combined size of all `paths`, used as the 100% mark for multi-file reads.
///
/// # Example
///
/// ```rust
/// use linebar::utils::total_size;
///
/// let none: [&str; 0] = [];
/// assert_eq!(total_size(&none).unwrap(), 0);
/// ```
pub fn total_size<P: AsRef<Path>>(paths: &[P]) -> Result<u64> {
    let mut total: u64 = 0;
    for path in paths {
        let size = file_size(path)?;
        debug!("Input {:?} has {} bytes", path.as_ref(), size);
        total = total.saturating_add(size);
    }
    Ok(total)
}
