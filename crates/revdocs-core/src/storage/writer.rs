//! Temp-file writer with atomic finalize.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::FetchError;

/// Writer for one destination file.
///
/// Each writer owns a uniquely named temp file in the destination directory,
/// so concurrent writers to the same destination never share a file handle.
/// The last one to finalize wins. Dropping an unfinalized writer removes its
/// temp file.
pub struct DocumentWriter {
    file: NamedTempFile,
    final_path: PathBuf,
}

impl DocumentWriter {
    /// Create a fresh temp file next to `final_path`.
    pub fn create(final_path: &Path) -> Result<Self, FetchError> {
        let dir = final_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let prefix = match final_path.file_name() {
            Some(name) => format!(".{}.", name.to_string_lossy()),
            None => ".".to_string(),
        };
        let file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(super::TEMP_SUFFIX)
            .tempfile_in(dir)
            .map_err(|e| FetchError::io("create temp file", dir, e))?;
        Ok(DocumentWriter {
            file,
            final_path: final_path.to_path_buf(),
        })
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), FetchError> {
        let path = self.file.path().to_path_buf();
        self.file
            .write_all(data)
            .map_err(|e| FetchError::io("write", path, e))
    }

    /// Sync and rename the temp file over the final path. Consumes the writer.
    /// On failure the temp file is removed and the previous final file is left as it was.
    pub fn finalize(self) -> Result<(), FetchError> {
        let DocumentWriter { file, final_path } = self;
        file.as_file()
            .sync_all()
            .map_err(|e| FetchError::io("sync", file.path(), e))?;
        file.persist(&final_path)
            .map_err(|e| FetchError::io("rename into place", &final_path, e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn finalize_moves_temp_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("index.pdf");
        let mut w = DocumentWriter::create(&final_path).unwrap();
        w.write_all(b"%PDF-1.4").unwrap();
        w.write_all(b"\n").unwrap();
        w.finalize().unwrap();
        assert_eq!(std::fs::read(&final_path).unwrap(), b"%PDF-1.4\n");
        assert_eq!(entries(dir.path()), vec!["index.pdf".to_string()]);
    }

    #[test]
    fn temp_file_is_hidden_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let _w = DocumentWriter::create(&dir.path().join("index.html")).unwrap();
        let names = entries(dir.path());
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with(".index.html."), "{}", names[0]);
        assert!(names[0].ends_with(".part"), "{}", names[0]);
    }

    #[test]
    fn unfinalized_writer_leaves_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("index.html");
        std::fs::write(&final_path, b"old").unwrap();
        {
            let mut w = DocumentWriter::create(&final_path).unwrap();
            w.write_all(b"partial new").unwrap();
        }
        assert_eq!(std::fs::read(&final_path).unwrap(), b"old");
        assert_eq!(entries(dir.path()), vec!["index.html".to_string()]);
    }

    #[test]
    fn interleaved_writers_to_same_destination_last_finalize_wins() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("index.html");

        let mut a = DocumentWriter::create(&final_path).unwrap();
        a.write_all(b"AAAA").unwrap();
        let mut b = DocumentWriter::create(&final_path).unwrap();
        a.finalize().unwrap();
        assert_eq!(std::fs::read(&final_path).unwrap(), b"AAAA");

        b.write_all(b"BBBBBB").unwrap();
        b.finalize().unwrap();
        assert_eq!(std::fs::read(&final_path).unwrap(), b"BBBBBB");
        assert_eq!(entries(dir.path()), vec!["index.html".to_string()]);
    }

    #[test]
    fn create_fails_in_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("missing").join("index.html");
        match DocumentWriter::create(&final_path) {
            Err(FetchError::Io { op, .. }) => assert_eq!(op, "create temp file"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("expected error"),
        }
    }
}
