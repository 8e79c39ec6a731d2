//! SHA-256 checksums for report content.

use sha2::{Digest, Sha256};

/// Computes the hex-encoded SHA-256 checksum of the given content.
pub fn compute_checksum(content: &str) -> String {
    format!("{:x}", Sha256::digest(content.as_bytes()))
}
