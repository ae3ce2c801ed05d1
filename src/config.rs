//! Import configuration properties.
//!
//! Read-only input for one resolution run; fixed at construction and applied
//! uniformly to every source the run touches.

use crate::domain::ImportFormat;

/// Configuration for one import-resolution run.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    path: String,
    file_type: ImportFormat,
    var_substitution: bool,
    var_substitution_in_variables: bool,
    var_substitution_undefined_throws_exceptions: bool,
}

impl ImportConfig {
    /// Create a configuration for `path` with auto format detection and
    /// variable substitution disabled.
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            file_type: ImportFormat::Auto,
            var_substitution: false,
            var_substitution_in_variables: true,
            var_substitution_undefined_throws_exceptions: true,
        }
    }

    /// Fix the decode format for every source instead of auto detection.
    pub fn with_file_type(mut self, file_type: ImportFormat) -> Self {
        self.file_type = file_type;
        self
    }

    /// Enable `${name}` placeholder substitution from environment variables.
    pub fn with_var_substitution(mut self, enabled: bool) -> Self {
        self.var_substitution = enabled;
        self
    }

    /// Control whether substituted values are themselves re-scanned for
    /// further placeholders.
    pub fn with_var_substitution_in_variables(mut self, enabled: bool) -> Self {
        self.var_substitution_in_variables = enabled;
        self
    }

    /// Control whether an undefined placeholder aborts the run (`true`) or is
    /// left in the text verbatim (`false`).
    pub fn with_var_substitution_undefined_throws_exceptions(mut self, enabled: bool) -> Self {
        self.var_substitution_undefined_throws_exceptions = enabled;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn file_type(&self) -> ImportFormat {
        self.file_type
    }

    pub fn var_substitution(&self) -> bool {
        self.var_substitution
    }

    pub fn var_substitution_in_variables(&self) -> bool {
        self.var_substitution_in_variables
    }

    pub fn var_substitution_undefined_throws_exceptions(&self) -> bool {
        self.var_substitution_undefined_throws_exceptions
    }
}
