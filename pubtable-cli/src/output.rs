//! Output file handling.
//!
//! The table is written to a temporary file next to the destination and moved
//! into place only once it is complete, so a failed run never leaves a truncated
//! or half-updated output behind.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `contents` atomically
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
