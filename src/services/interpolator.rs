//! `${name}` placeholder substitution over raw document text.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::config::ImportConfig;
use crate::domain::ImportError;

/// Passes allowed when re-scanning substituted values before giving up on a
/// cycle such as `A=${B}`, `B=${A}`.
const MAX_SUBSTITUTION_PASSES: usize = 16;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_.]*)\}").unwrap())
}

/// Substitutes `${name}` placeholders with process environment variables.
///
/// Behavior is fixed from configuration at construction time: whether
/// substituted values are re-scanned for further placeholders, and whether an
/// undefined placeholder is an error or left in the text verbatim.
#[derive(Debug, Clone)]
pub struct Interpolator {
    in_variables: bool,
    undefined_throws: bool,
}

impl Interpolator {
    /// Build an interpolator when substitution is enabled, `None` otherwise.
    pub fn from_config(config: &ImportConfig) -> Option<Self> {
        config.var_substitution().then(|| Self {
            in_variables: config.var_substitution_in_variables(),
            undefined_throws: config.var_substitution_undefined_throws_exceptions(),
        })
    }

    /// Replace every `${name}` placeholder in `text`.
    pub fn interpolate(&self, text: &str) -> Result<String, ImportError> {
        self.interpolate_with(text, &|name| std::env::var(name).ok())
    }

    fn interpolate_with(
        &self,
        text: &str,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<String, ImportError> {
        let mut current = self.substitute_once(text, lookup)?;

        if !self.in_variables {
            return Ok(current);
        }

        for _ in 1..MAX_SUBSTITUTION_PASSES {
            let next = self.substitute_once(&current, lookup)?;
            if next == current {
                return Ok(next);
            }
            current = next;
        }

        Err(ImportError::SubstitutionDepthExceeded { limit: MAX_SUBSTITUTION_PASSES })
    }

    fn substitute_once(
        &self,
        text: &str,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<String, ImportError> {
        let mut undefined: Option<String> = None;

        let replaced = placeholder_pattern().replace_all(text, |captures: &Captures<'_>| {
            let name = &captures[1];
            match lookup(name) {
                Some(value) => value,
                None => {
                    if self.undefined_throws && undefined.is_none() {
                        undefined = Some(name.to_string());
                    }
                    // Leave the placeholder verbatim.
                    captures[0].to_string()
                }
            }
        });

        match undefined {
            Some(name) => Err(ImportError::UndefinedVariable(name)),
            None => Ok(replaced.into_owned()),
        }
    }
}
