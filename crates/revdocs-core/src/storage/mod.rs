//! Disk I/O for fetched documents.
//!
//! Bodies go to a uniquely named `.part` temp file next to the destination,
//! are synced, then renamed over the final name. An interrupted write never
//! replaces a good `index.*` with a truncated one.

mod writer;

pub use writer::DocumentWriter;

use std::path::Path;

use crate::error::FetchError;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Creates `dir` and its parents if absent. Succeeds if it already exists,
/// including when another worker creates it concurrently.
pub fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    std::fs::create_dir_all(dir).map_err(|e| FetchError::io("create dir", dir, e))
}

/// Writes `data` to `path`, replacing any existing content.
pub fn write_replace(path: &Path, data: &[u8]) -> Result<(), FetchError> {
    let mut writer = DocumentWriter::create(path)?;
    writer.write_all(data)?;
    writer.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("x").join("y");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn write_replace_overwrites_longer_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        write_replace(&path, b"a much longer first body").unwrap();
        write_replace(&path, b"short").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"short");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
