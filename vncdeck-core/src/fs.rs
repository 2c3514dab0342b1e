//! Small filesystem helpers shared by the store and settings (atomic writes, optional reads).

use std::io;
use std::path::Path;

/// Writes `bytes` to `path` through a sibling temporary file and a rename,
/// so readers never observe a half-written file.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory, the temporary file or
/// the rename fails. The temporary file is removed on rename failure.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .and_then(|v| v.to_str())
        .unwrap_or("vncdeck");
    let tmp_path = path.with_file_name(format!(".{file_name}.tmp"));

    std::fs::write(&tmp_path, bytes)?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }

    Ok(())
}

/// Reads a UTF-8 file, returning `None` when it does not exist
///
/// # Errors
///
/// Returns any I/O error other than "not found".
pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
