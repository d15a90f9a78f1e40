use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Invalid IV length: expected {expected} bytes, got {got}")]
    InvalidIvLength { expected: usize, got: usize },

    #[error("Encrypted data too short")]
    DataTooShort,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// AEAD authentication failed. Carries no detail: a wrong key and a
    /// modified ciphertext are indistinguishable.
    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
