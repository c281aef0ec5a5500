//! Plain-text output writer.

use crate::error::{Error, Result};
use crate::services::DocumentWriter;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes UTF-8 text files atomically.
///
/// Content is staged in a temporary file in the destination directory and
/// renamed into place, so a failed write never leaves a partial file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextWriter;

impl PlainTextWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentWriter for PlainTextWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        write_atomic(path, content.as_bytes())
    }
}

/// Stage `bytes` next to `path` and rename into place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)
        .map_err(|e| Error::WriteError(format!("{}: {}", path.display(), e)))?;
    staged
        .write_all(bytes)
        .map_err(|e| Error::WriteError(format!("{}: {}", path.display(), e)))?;
    staged
        .persist(path)
        .map_err(|e| Error::WriteError(format!("{}: {}", path.display(), e)))?;

    Ok(())
}
