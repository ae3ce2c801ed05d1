//! Classification of the configured import path into a concrete source kind.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::ImportError;

/// A resolved import source.
///
/// Exactly one classification applies per configured path; it is computed
/// once by [`Location::resolve`] and drives all subsequent branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A readable regular file on the local filesystem.
    LocalFile(PathBuf),
    /// A directory on the local filesystem whose entries are imported.
    LocalDirectory(PathBuf),
    /// A remote document fetched over HTTP(S).
    Remote(Url),
}

impl Location {
    /// Classify a configured path-or-URL string.
    ///
    /// `file://` URLs and plain filesystem paths resolve locally, with the
    /// file/directory distinction taken from filesystem metadata; a missing
    /// local path is an error. Every other URL scheme is treated as remote.
    pub fn resolve(path_or_url: &str) -> Result<Self, ImportError> {
        match Url::parse(path_or_url) {
            Ok(url) if url.scheme() == "file" => {
                let path = url.to_file_path().map_err(|()| ImportError::InvalidPath {
                    path: path_or_url.to_string(),
                    details: "file URL does not map to a local path".to_string(),
                })?;
                Self::classify_local(path)
            }
            Ok(url) => Ok(Location::Remote(url)),
            // No scheme at all: a plain local path.
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Self::classify_local(PathBuf::from(path_or_url))
            }
            Err(err) => Err(ImportError::InvalidPath {
                path: path_or_url.to_string(),
                details: err.to_string(),
            }),
        }
    }

    fn classify_local(path: PathBuf) -> Result<Self, ImportError> {
        let metadata = fs::metadata(&path)
            .map_err(|_| ImportError::PathMissing(path.display().to_string()))?;

        if metadata.is_dir() {
            Ok(Location::LocalDirectory(path))
        } else {
            Ok(Location::LocalFile(path))
        }
    }
}

/// Source-relative identifier for a local file: its final path component.
pub fn file_name(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Source-relative identifier for a remote document: the URL's terminal
/// path segment.
pub fn remote_name(url: &Url) -> Result<String, ImportError> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ImportError::RemoteNameMissing(url.to_string()))
}
