//! Cryptographic primitives for `.pmtpk` containers.
//!
//! SHA-256 content hashing, PBKDF2-HMAC-SHA256 passphrase key derivation,
//! AES-256-GCM authenticated encryption, and CSPRNG salt/IV generation.

pub mod aes_gcm;
pub mod error;
pub mod hash;
pub mod kdf;
pub mod random;
pub mod types;

pub use aes_gcm::{aes_gcm_decrypt, aes_gcm_encrypt};
pub use error::CryptoError;
pub use hash::sha256;
pub use kdf::{derive_key, derive_key_with_iterations};
pub use random::{generate_iv, generate_salt};
pub use types::{
    AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH,
    SHA256_LENGTH,
};
