//! SHA-256 content hashing.

use sha2::{Digest, Sha256};

use crate::types::SHA256_LENGTH;

/// Compute the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; SHA256_LENGTH] {
    let mut digest = [0u8; SHA256_LENGTH];
    digest.copy_from_slice(&Sha256::digest(data));
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        assert_eq!(
            hex::encode(sha256(b"hello world")),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn single_bit_changes_digest() {
        assert_ne!(sha256(b"prompt"), sha256(b"Prompt"));
    }
}
