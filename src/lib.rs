//! realm-import: resolve realm-configuration documents from a local file, a
//! local directory, or a remote URL into a decoded, checksummed import set.
//!
//! This crate is the single ingestion boundary for downstream reconciliation:
//! it classifies the configured source, acquires raw text (with HTTP basic
//! auth taken from URL user-info), optionally substitutes `${name}`
//! placeholders from the environment, stamps a SHA-256 checksum over the
//! effective text, and strictly decodes YAML or JSON into the realm model.
//! Any failure aborts the whole run; there is no partial result.
//!
//! ```no_run
//! use realm_import::{ImportConfig, resolve};
//!
//! # fn main() -> Result<(), realm_import::ImportError> {
//! let imports = resolve(ImportConfig::new("/etc/realms"))?;
//! for (name, import) in imports.iter() {
//!     println!("{name}: realm {} ({})", import.realm(), import.checksum());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod services;

pub use config::ImportConfig;
pub use domain::{
    DecoderFormat, ImportError, ImportFormat, ImportSet, Location, RealmImport,
    RealmRepresentation,
};
pub use services::{ImportProvider, resolve};
