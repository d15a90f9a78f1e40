//! CSPRNG salt and IV generation.

use crate::error::CryptoError;
use crate::types::{AES_GCM_IV_LENGTH, SALT_LENGTH};

/// Generate a random 16-byte PBKDF2 salt.
pub fn generate_salt() -> Result<[u8; SALT_LENGTH], CryptoError> {
    let mut salt = [0u8; SALT_LENGTH];
    getrandom::getrandom(&mut salt).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(salt)
}

/// Generate a random 12-byte IV for AES-GCM.
pub fn generate_iv() -> Result<[u8; AES_GCM_IV_LENGTH], CryptoError> {
    let mut iv = [0u8; AES_GCM_IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salts_are_fresh() {
        assert_ne!(generate_salt().unwrap(), generate_salt().unwrap());
    }

    #[test]
    fn ivs_are_fresh() {
        assert_ne!(generate_iv().unwrap(), generate_iv().unwrap());
    }
}
