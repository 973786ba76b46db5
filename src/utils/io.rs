//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Write content to file, creating parent directories as needed.
///
/// Writes always fully overwrite; re-running with identical content is
/// byte-for-byte idempotent. Failures surface as `Error::Io` with the
/// operation and path in the message.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(e, operation, path))?;
    }
    fs::write(path, content).map_err(|e| io_error(e, operation, path))
}

fn io_error(e: std::io::Error, operation: &str, path: &Path) -> Error {
    Error::Io(std::io::Error::new(
        e.kind(),
        format!("{}: {} ({})", operation, e, path.display()),
    ))
}
