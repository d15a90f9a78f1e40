/// AES-GCM IV length in bytes (96 bits per NIST recommendation).
pub const AES_GCM_IV_LENGTH: usize = 12;

/// AES-GCM tag length in bytes (128 bits).
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// PBKDF2 salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// PBKDF2-HMAC-SHA256 iteration count.
///
/// Part of the container format: every peer must derive with exactly this
/// count or encrypted containers will not open.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// SHA-256 digest length in bytes.
pub const SHA256_LENGTH: usize = 32;
