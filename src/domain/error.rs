use std::io;

use thiserror::Error;

/// Library-wide error type for import resolution.
///
/// Every failure during a resolution run surfaces as one of these variants;
/// there is no retry or partial-result path, the first error aborts the run.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Underlying I/O failure while reading a local source.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Underlying HTTP failure while fetching a remote source.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The configured import path does not exist or is not a readable location.
    #[error("Import path does not exist: {0}")]
    PathMissing(String),

    /// The configured import path is not a valid path or URL.
    #[error("Invalid import path '{path}': {details}")]
    InvalidPath { path: String, details: String },

    /// A remote import URL carries no terminal path segment to key the result by.
    #[error("Remote import URL has no file name: {0}")]
    RemoteNameMissing(String),

    /// Auto format detection met a file extension it does not recognize.
    #[error("Unknown file extension: {0}")]
    UnknownFileExtension(String),

    /// An explicit format value outside the supported set.
    #[error("Unknown import file type: {0}")]
    UnknownFileType(String),

    /// Two sources within one resolution run normalized to the same key.
    #[error("Duplicate import key {0}")]
    DuplicateKey(String),

    /// A `${name}` placeholder referenced a variable that is not defined.
    #[error("Undefined variable '{0}' in import document")]
    UndefinedVariable(String),

    /// Variable substitution kept producing new placeholders without settling.
    #[error("Variable substitution did not settle after {limit} passes")]
    SubstitutionDepthExceeded { limit: usize },

    /// A document failed strict decoding, including unknown-field rejection.
    #[error("Failed to decode '{filename}': {details}")]
    Decode { filename: String, details: String },
}

impl ImportError {
    pub(crate) fn decode<S: Into<String>>(filename: S, details: impl ToString) -> Self {
        ImportError::Decode { filename: filename.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            ImportError::Io(err) => err.kind(),
            ImportError::Http(_) => io::ErrorKind::ConnectionAborted,
            ImportError::PathMissing(_) | ImportError::RemoteNameMissing(_) => {
                io::ErrorKind::NotFound
            }
            ImportError::InvalidPath { .. }
            | ImportError::UnknownFileExtension(_)
            | ImportError::UnknownFileType(_) => io::ErrorKind::InvalidInput,
            ImportError::DuplicateKey(_)
            | ImportError::UndefinedVariable(_)
            | ImportError::SubstitutionDepthExceeded { .. }
            | ImportError::Decode { .. } => io::ErrorKind::InvalidData,
        }
    }
}
