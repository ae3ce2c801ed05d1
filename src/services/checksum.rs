//! Content checksum used downstream for change detection.

use sha2::{Digest, Sha256};

/// SHA-256 digest of `bytes` as a lowercase hex string.
///
/// Computed over the effective (post-interpolation) document text, so the
/// digest reflects what was decoded, not the template on disk.
pub fn checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
