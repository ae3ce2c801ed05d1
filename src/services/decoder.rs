//! Strict decoding of interpolated document text into the realm model.

use crate::domain::{DecoderFormat, ImportError, RealmRepresentation};

type DecodeFn = fn(&str) -> Result<RealmRepresentation, String>;

fn decoder_for(format: DecoderFormat) -> DecodeFn {
    match format {
        DecoderFormat::Yaml => decode_yaml,
        DecoderFormat::Json => decode_json,
    }
}

fn decode_yaml(content: &str) -> Result<RealmRepresentation, String> {
    serde_yaml::from_str(content).map_err(|err| err.to_string())
}

fn decode_json(content: &str) -> Result<RealmRepresentation, String> {
    serde_json::from_str(content).map_err(|err| err.to_string())
}

/// Decode `content` as `format`, rejecting unknown fields at any depth.
///
/// `filename` only labels the error; format selection happened before this
/// point.
pub fn decode(
    format: DecoderFormat,
    filename: &str,
    content: &str,
) -> Result<RealmRepresentation, ImportError> {
    decoder_for(format)(content).map_err(|details| ImportError::decode(filename, details))
}
