//! Content hashing for rendered output.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 of `rendered`.
#[must_use]
pub fn fingerprint(rendered: &[u8]) -> String {
    format!("{:x}", Sha256::digest(rendered))
}
