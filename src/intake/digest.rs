//! SHA-256 content digests.

use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of the content's UTF-8 bytes, hex-encoded
/// in lowercase.
///
/// Deterministic: identical content always yields the identical digest.
///
/// # Examples
///
/// ```
/// use filedrop::intake::hex_digest;
///
/// let digest = hex_digest("hello");
/// assert_eq!(digest.len(), 64);
/// assert_ne!(digest, hex_digest("hello!"));
/// ```
pub fn hex_digest(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
