//! Side-effectful collaborators of the import pipeline: content acquisition,
//! interpolation, checksumming, decoding, and the aggregating provider.

mod checksum;
mod content_reader;
mod decoder;
mod interpolator;
mod provider;

pub use checksum::checksum;
pub use content_reader::{ContentReader, RawDocument};
pub use decoder::decode;
pub use interpolator::Interpolator;
pub use provider::{ImportProvider, resolve};
