//! AES-256-GCM encryption for container payloads.
//!
//! The container stores the IV in its own header, so these functions take the
//! IV explicitly and produce/consume bare `ciphertext ‖ tag`. No associated
//! data is bound: peers that predate this crate encrypt without AAD.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::error::CryptoError;
use crate::types::{AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH};

fn build_cipher(key: &[u8], iv: &[u8]) -> Result<Aes256Gcm, CryptoError> {
    if key.len() != AES_KEY_LENGTH {
        return Err(CryptoError::InvalidKeyLength {
            expected: AES_KEY_LENGTH,
            got: key.len(),
        });
    }
    if iv.len() != AES_GCM_IV_LENGTH {
        return Err(CryptoError::InvalidIvLength {
            expected: AES_GCM_IV_LENGTH,
            got: iv.len(),
        });
    }
    Aes256Gcm::new_from_slice(key).map_err(|e| CryptoError::EncryptionFailed(e.to_string()))
}

/// Encrypt `plaintext` with AES-256-GCM.
///
/// Returns `ciphertext ‖ tag` (plaintext length + 16 bytes).
pub fn aes_gcm_encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = build_cipher(key, iv)?;
    cipher
        .encrypt(Nonce::from_slice(iv), plaintext)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))
}

/// Decrypt `ciphertext ‖ tag` with AES-256-GCM.
///
/// Any authentication failure is reported as [`CryptoError::DecryptionFailed`].
pub fn aes_gcm_decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = build_cipher(key, iv)?;
    if ciphertext.len() < AES_GCM_TAG_LENGTH {
        return Err(CryptoError::DataTooShort);
    }
    cipher
        .decrypt(Nonce::from_slice(iv), ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)
}
