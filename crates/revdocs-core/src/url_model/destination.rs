//! Destination file resolution: `<base>/<segment>/index.<ext>`.

use std::path::{Path, PathBuf};

use super::path::path_segment;
use crate::error::FetchError;

/// Kind of document, decided by the URL path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Html,
    Pdf,
}

impl DocKind {
    /// `Pdf` if the URL path ends in `.pdf` (any case), else `Html`.
    ///
    /// Looks at the path as given, before trailing-slash stripping; query and
    /// fragment never count.
    pub fn from_url_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".pdf") {
            DocKind::Pdf
        } else {
            DocKind::Html
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocKind::Html => "html",
            DocKind::Pdf => "pdf",
        }
    }

    pub fn file_name(self) -> String {
        format!("index.{}", self.extension())
    }
}

/// Where a fetched document lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Folder name taken from the URL (last path segment).
    pub segment: String,
    pub kind: DocKind,
    /// `<base>/<segment>`.
    pub dir: PathBuf,
    /// `<base>/<segment>/index.<ext>`.
    pub file: PathBuf,
}

impl Destination {
    /// Resolves the destination for `url` under `base_dir`. Touches neither
    /// the network nor the filesystem.
    pub fn resolve(base_dir: &Path, url: &str) -> Result<Self, FetchError> {
        let segment = path_segment(url)?;
        // path_segment already proved the URL parses.
        let kind = url::Url::parse(url)
            .map(|u| DocKind::from_url_path(u.path()))
            .unwrap_or(DocKind::Html);
        let dir = base_dir.join(&segment);
        let file = dir.join(kind.file_name());
        Ok(Destination {
            segment,
            kind,
            dir,
            file,
        })
    }
}
