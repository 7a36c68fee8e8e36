//! Shared filesystem helpers.

use serde::Serialize;
use std::path::Path;

use crate::errors::GrindError;

/// Read a UTF-8 file, mapping failures to `GrindError::FileRead`.
pub fn read_file(path: &Path) -> Result<String, GrindError> {
    std::fs::read_to_string(path).map_err(|source| GrindError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a file wholesale, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<(), GrindError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    };
    write().map_err(|source| GrindError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `value` as two-space indented JSON and write it to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), GrindError> {
    let content = serde_json::to_string_pretty(value)?;
    write_file(path, &content)
}

/// Order-preserving de-duplication.
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
