use std::fmt;

use pmtpk_crypto::CryptoError;
use serde::Serialize;
use thiserror::Error;

/// Cause class of a [`PmtpkError`].
///
/// Callers branch on this, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Unrecognized magic/tag, or the decoded JSON is not a pack.
    InvalidFormat,
    /// Too short for the claimed type, undecompressable, or hash mismatch.
    Corrupted,
    /// Version byte newer than this implementation.
    UnsupportedVersion,
    /// Passphrase missing for an encrypted container, or AEAD failure.
    WrongPassword,
    /// A primitive failed while encoding. Decode never produces this.
    #[serde(rename = "ENCODE_FAILED")]
    Encode,
}

impl ErrorKind {
    /// Stable code string shared with the TypeScript peers.
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "INVALID_FORMAT",
            ErrorKind::Corrupted => "CORRUPTED",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorKind::WrongPassword => "WRONG_PASSWORD",
            ErrorKind::Encode => "ENCODE_FAILED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
pub enum PmtpkError {
    #[error("Invalid pack format: {0}")]
    InvalidFormat(String),

    #[error("File is corrupted: {0}")]
    Corrupted(String),

    #[error("Unsupported format version {version} (supported up to {supported}). Please update PromptPack.")]
    UnsupportedVersion { version: u8, supported: u8 },

    #[error("Password required for encrypted pack")]
    PasswordRequired,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Passphrase must not be empty")]
    EmptyPassphrase,

    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

impl PmtpkError {
    /// The cause class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PmtpkError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            PmtpkError::Corrupted(_) => ErrorKind::Corrupted,
            PmtpkError::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
            PmtpkError::PasswordRequired | PmtpkError::WrongPassword => ErrorKind::WrongPassword,
            PmtpkError::EmptyPassphrase | PmtpkError::Encode(_) | PmtpkError::Crypto(_) => {
                ErrorKind::Encode
            }
        }
    }

    /// True when decoding stopped because no passphrase was supplied, as
    /// opposed to a supplied passphrase being wrong.
    pub fn is_password_required(&self) -> bool {
        matches!(self, PmtpkError::PasswordRequired)
    }
}

pub type Result<T> = std::result::Result<T, PmtpkError>;
