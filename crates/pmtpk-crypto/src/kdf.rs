//! PBKDF2-HMAC-SHA256 passphrase key derivation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::types::{AES_KEY_LENGTH, PBKDF2_ITERATIONS};

/// Derive the 256-bit container key from a passphrase and salt.
///
/// Uses the format's fixed iteration count. The caller owns the returned key
/// and should zeroize it once the cipher has been built.
pub fn derive_key(passphrase: &str, salt: &[u8]) -> [u8; AES_KEY_LENGTH] {
    derive_key_with_iterations(passphrase, salt, PBKDF2_ITERATIONS)
}

/// Derive a 256-bit key with an explicit iteration count.
///
/// # Arguments
/// * `passphrase` - UTF-8 passphrase, used as the HMAC key as-is (no normalization)
/// * `salt` - Salt bytes
/// * `iterations` - PBKDF2 round count
pub fn derive_key_with_iterations(
    passphrase: &str,
    salt: &[u8],
    iterations: u32,
) -> [u8; AES_KEY_LENGTH] {
    let mut key = [0u8; AES_KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, iterations, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    // PBKDF2-HMAC-SHA256 vectors (RFC 6070 inputs, SHA-256 PRF, dkLen = 32).
    #[test]
    fn known_vector_one_iteration() {
        let key = derive_key_with_iterations("password", b"salt", 1);
        assert_eq!(
            hex::encode(key),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn known_vector_two_iterations() {
        let key = derive_key_with_iterations("password", b"salt", 2);
        assert_eq!(
            hex::encode(key),
            "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"
        );
    }

    #[test]
    fn known_vector_4096_iterations() {
        let key = derive_key_with_iterations("password", b"salt", 4096);
        assert_eq!(
            hex::encode(key),
            "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"
        );
    }

    #[test]
    fn deterministic() {
        let salt = [7u8; 16];
        assert_eq!(derive_key("correct-horse", &salt), derive_key("correct-horse", &salt));
    }

    #[test]
    fn different_salts_different_keys() {
        let a = derive_key("correct-horse", &[1u8; 16]);
        let b = derive_key("correct-horse", &[2u8; 16]);
        assert_ne!(a, b);
    }

    #[test]
    fn different_passphrases_different_keys() {
        let salt = [9u8; 16];
        assert_ne!(
            derive_key("correct-horse", &salt),
            derive_key("wrong-horse", &salt)
        );
    }

    #[test]
    fn uses_format_iteration_count() {
        let salt = [3u8; 16];
        assert_eq!(
            derive_key("pw", &salt),
            derive_key_with_iterations("pw", &salt, PBKDF2_ITERATIONS)
        );
    }
}
