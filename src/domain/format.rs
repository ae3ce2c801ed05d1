//! Import file format selection and extension-based auto detection.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ImportError;

/// Configured import file format.
///
/// `Auto` is resolved per file from the filename extension, so a directory
/// import may mix YAML and JSON documents in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    Yaml,
    Json,
    #[default]
    Auto,
}

impl ImportFormat {
    /// Resolve the decoder format for one file.
    ///
    /// Explicit formats apply to every source; `Auto` inspects the extension.
    pub fn resolve(self, filename: &str) -> Result<DecoderFormat, ImportError> {
        match self {
            ImportFormat::Yaml => Ok(DecoderFormat::Yaml),
            ImportFormat::Json => Ok(DecoderFormat::Json),
            ImportFormat::Auto => DecoderFormat::from_extension(filename),
        }
    }
}

impl FromStr for ImportFormat {
    type Err = ImportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "yaml" => Ok(ImportFormat::Yaml),
            "json" => Ok(ImportFormat::Json),
            "auto" => Ok(ImportFormat::Auto),
            other => Err(ImportError::UnknownFileType(other.to_string())),
        }
    }
}

/// Concrete decoder selected for one document, after any auto detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderFormat {
    Yaml,
    Json,
}

impl DecoderFormat {
    /// Pure extension-to-format mapping used by [`ImportFormat::Auto`].
    ///
    /// Extensions are matched case-insensitively; anything outside
    /// `yaml`/`yml`/`json` is rejected.
    pub fn from_extension(filename: &str) -> Result<Self, ImportError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Ok(DecoderFormat::Yaml),
            "json" => Ok(DecoderFormat::Json),
            _ => Err(ImportError::UnknownFileExtension(extension)),
        }
    }
}
