//! Pure domain types: errors, source classification, formats, the realm
//! model, and the result mapping.

mod error;
mod format;
mod import_set;
mod location;
mod realm;

pub use error::ImportError;
pub use format::{DecoderFormat, ImportFormat};
pub use import_set::ImportSet;
pub use location::{Location, file_name, remote_name};
pub use realm::{
    ClientRepresentation, RealmImport, RealmRepresentation, RoleRepresentation,
    RolesRepresentation, UserRepresentation,
};
