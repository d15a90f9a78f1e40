//! Container framing: magic, type tag, version, content hash, key parameters.
//!
//! ```text
//! offset  size  field
//!      0     3  magic "PPK"
//!      3     1  tag (0x00 obfuscated, 0x01 encrypted)
//!      4     1  format version
//!      5    32  SHA-256 of the uncompressed JSON
//!     37    16  salt      (encrypted only)
//!     53    12  IV        (encrypted only)
//!  37/65     -  payload
//! ```

use std::fmt;

use pmtpk_crypto::{AES_GCM_IV_LENGTH, SALT_LENGTH, SHA256_LENGTH};

use crate::error::{PmtpkError, Result};

/// Format family magic, `"PPK"`.
pub const MAGIC: [u8; 3] = *b"PPK";

/// Highest format version this implementation reads, and the one it writes.
pub const FORMAT_VERSION: u8 = 0x01;

/// File extension for containers, without the dot.
pub const FILE_EXTENSION: &str = "pmtpk";

const TAG_OFFSET: usize = MAGIC.len();
const VERSION_OFFSET: usize = TAG_OFFSET + 1;
const HASH_OFFSET: usize = VERSION_OFFSET + 1;

/// Header length of an obfuscated container (37 bytes).
pub const OBFUSCATED_HEADER_LEN: usize = HASH_OFFSET + SHA256_LENGTH;

/// Header length of an encrypted container (65 bytes).
pub const ENCRYPTED_HEADER_LEN: usize = OBFUSCATED_HEADER_LEN + SALT_LENGTH + AES_GCM_IV_LENGTH;

/// Container type, selected by the tag byte after the magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContainerKind {
    Obfuscated = 0x00,
    Encrypted = 0x01,
}

impl ContainerKind {
    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(ContainerKind::Obfuscated),
            0x01 => Some(ContainerKind::Encrypted),
            _ => None,
        }
    }

    /// Bytes before the payload for this container type.
    pub const fn header_len(self) -> usize {
        match self {
            ContainerKind::Obfuscated => OBFUSCATED_HEADER_LEN,
            ContainerKind::Encrypted => ENCRYPTED_HEADER_LEN,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ContainerKind::Obfuscated => "obfuscated",
            ContainerKind::Encrypted => "encrypted",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identify the container type from the first four bytes.
///
/// Returns `None` for short input, foreign magic, or an unknown tag.
pub fn sniff(data: &[u8]) -> Option<ContainerKind> {
    match data {
        [m0, m1, m2, tag, ..] if [*m0, *m1, *m2] == MAGIC => ContainerKind::from_tag(*tag),
        _ => None,
    }
}

/// True if `data` starts with the obfuscated container magic.
pub fn is_obfuscated_container(data: &[u8]) -> bool {
    sniff(data) == Some(ContainerKind::Obfuscated)
}

/// True if `data` starts with the encrypted container magic.
pub fn is_encrypted_container(data: &[u8]) -> bool {
    sniff(data) == Some(ContainerKind::Encrypted)
}

/// Salt and IV slices of an encrypted container.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeyParams<'a> {
    pub salt: &'a [u8],
    pub iv: &'a [u8],
}

/// A validated view over container bytes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame<'a> {
    pub kind: ContainerKind,
    pub version: u8,
    pub content_hash: [u8; SHA256_LENGTH],
    pub key_params: Option<KeyParams<'a>>,
    pub payload: &'a [u8],
}

/// Parse and validate the frame.
///
/// Check order: magic/tag (`InvalidFormat`), length for the tag
/// (`Corrupted`), version (`UnsupportedVersion`).
pub(crate) fn parse_frame(data: &[u8]) -> Result<Frame<'_>> {
    let kind = sniff(data)
        .ok_or_else(|| PmtpkError::InvalidFormat("unrecognized magic bytes".to_string()))?;

    let header_len = kind.header_len();
    if data.len() < header_len {
        return Err(PmtpkError::Corrupted(format!(
            "{} container is {} bytes, header needs {}",
            kind,
            data.len(),
            header_len
        )));
    }

    let version = data[VERSION_OFFSET];
    if version > FORMAT_VERSION {
        return Err(PmtpkError::UnsupportedVersion {
            version,
            supported: FORMAT_VERSION,
        });
    }

    let mut content_hash = [0u8; SHA256_LENGTH];
    content_hash.copy_from_slice(&data[HASH_OFFSET..OBFUSCATED_HEADER_LEN]);

    let key_params = match kind {
        ContainerKind::Obfuscated => None,
        ContainerKind::Encrypted => {
            let salt_end = OBFUSCATED_HEADER_LEN + SALT_LENGTH;
            Some(KeyParams {
                salt: &data[OBFUSCATED_HEADER_LEN..salt_end],
                iv: &data[salt_end..ENCRYPTED_HEADER_LEN],
            })
        }
    };

    Ok(Frame {
        kind,
        version,
        content_hash,
        key_params,
        payload: &data[header_len..],
    })
}

fn write_prefix(out: &mut Vec<u8>, kind: ContainerKind, content_hash: &[u8; SHA256_LENGTH]) {
    out.extend_from_slice(&MAGIC);
    out.push(kind.tag());
    out.push(FORMAT_VERSION);
    out.extend_from_slice(content_hash);
}

/// Frame an obfuscated payload.
pub(crate) fn write_obfuscated(content_hash: &[u8; SHA256_LENGTH], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(OBFUSCATED_HEADER_LEN + payload.len());
    write_prefix(&mut out, ContainerKind::Obfuscated, content_hash);
    out.extend_from_slice(payload);
    out
}

/// Frame an encrypted payload with its salt and IV.
pub(crate) fn write_encrypted(
    content_hash: &[u8; SHA256_LENGTH],
    salt: &[u8; SALT_LENGTH],
    iv: &[u8; AES_GCM_IV_LENGTH],
    ciphertext: &[u8],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(ENCRYPTED_HEADER_LEN + ciphertext.len());
    write_prefix(&mut out, ContainerKind::Encrypted, content_hash);
    out.extend_from_slice(salt);
    out.extend_from_slice(iv);
    out.extend_from_slice(ciphertext);
    out
}

/// Header facts about a container, read without decompressing or deriving keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub kind: ContainerKind,
    pub version: u8,
    /// SHA-256 of the uncompressed JSON, as stored in the header.
    pub content_hash: [u8; SHA256_LENGTH],
    pub header_len: usize,
    pub payload_len: usize,
}

impl ContainerInfo {
    pub fn is_encrypted(&self) -> bool {
        self.kind == ContainerKind::Encrypted
    }

    /// Lowercase hex of the stored content hash.
    pub fn content_hash_hex(&self) -> String {
        hex::encode(self.content_hash)
    }
}

/// Validate a container's frame and report its header.
///
/// Applies the same checks, in the same order, as decoding does before it
/// touches the payload. The content hash is reported, not verified.
pub fn inspect(data: &[u8]) -> Result<ContainerInfo> {
    let frame = parse_frame(data)?;
    Ok(ContainerInfo {
        kind: frame.kind,
        version: frame.version,
        content_hash: frame.content_hash,
        header_len: frame.kind.header_len(),
        payload_len: frame.payload.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn obfuscated_frame(payload: &[u8]) -> Vec<u8> {
        write_obfuscated(&[0xab; 32], payload)
    }

    #[test]
    fn header_sizes() {
        assert_eq!(OBFUSCATED_HEADER_LEN, 37);
        assert_eq!(ENCRYPTED_HEADER_LEN, 65);
    }

    #[test]
    fn obfuscated_layout() {
        let bytes = obfuscated_frame(&[1, 2, 3]);
        assert_eq!(&bytes[..4], &[0x50, 0x50, 0x4b, 0x00]);
        assert_eq!(bytes[4], FORMAT_VERSION);
        assert_eq!(&bytes[5..37], &[0xab; 32]);
        assert_eq!(&bytes[37..], &[1, 2, 3]);
    }

    #[test]
    fn encrypted_layout() {
        let bytes = write_encrypted(&[0x11; 32], &[0x22; 16], &[0x33; 12], &[0x44; 20]);
        assert_eq!(&bytes[..4], &[0x50, 0x50, 0x4b, 0x01]);
        assert_eq!(bytes[4], FORMAT_VERSION);
        assert_eq!(&bytes[5..37], &[0x11; 32]);
        assert_eq!(&bytes[37..53], &[0x22; 16]);
        assert_eq!(&bytes[53..65], &[0x33; 12]);
        assert_eq!(&bytes[65..], &[0x44; 20]);
    }

    #[test]
    fn parse_reads_back_fields() {
        let bytes = write_encrypted(&[0x11; 32], &[0x22; 16], &[0x33; 12], &[0x44; 20]);
        let frame = parse_frame(&bytes).unwrap();
        assert_eq!(frame.kind, ContainerKind::Encrypted);
        assert_eq!(frame.version, FORMAT_VERSION);
        assert_eq!(frame.content_hash, [0x11; 32]);
        let params = frame.key_params.unwrap();
        assert_eq!(params.salt, &[0x22; 16]);
        assert_eq!(params.iv, &[0x33; 12]);
        assert_eq!(frame.payload, &[0x44; 20]);
    }

    #[test]
    fn sniffing_short_input() {
        for len in 0..4 {
            let data = &b"PPK\x01"[..len];
            assert!(!is_obfuscated_container(data));
            assert!(!is_encrypted_container(data));
            assert_eq!(sniff(data), None);
        }
    }

    #[test]
    fn sniffing_foreign_magic() {
        assert!(!is_obfuscated_container(b"PK\x03\x04"));
        assert!(!is_encrypted_container(b"XPK\x01"));
        assert!(!is_encrypted_container(b"PPK\x02"));
        assert!(is_obfuscated_container(b"PPK\x00"));
        assert!(is_encrypted_container(b"PPK\x01"));
    }

    #[test]
    fn unknown_tag_is_invalid_format() {
        let mut bytes = obfuscated_frame(&[]);
        bytes[3] = 0x02;
        assert_eq!(parse_frame(&bytes).unwrap_err().kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn too_short_for_tag_is_corrupted() {
        let bytes = obfuscated_frame(&[]);
        assert!(parse_frame(&bytes).is_ok());
        let err = parse_frame(&bytes[..36]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Corrupted);

        // A full obfuscated-size header is still too short when tagged encrypted.
        let mut bytes = vec![0u8; 64];
        bytes[..4].copy_from_slice(b"PPK\x01");
        bytes[4] = FORMAT_VERSION;
        assert_eq!(parse_frame(&bytes).unwrap_err().kind(), ErrorKind::Corrupted);
    }

    #[test]
    fn magic_checked_before_length() {
        assert_eq!(parse_frame(b"PPK").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(parse_frame(b"PPK\x00").unwrap_err().kind(), ErrorKind::Corrupted);
    }

    #[test]
    fn length_checked_before_version() {
        let mut bytes = obfuscated_frame(&[]);
        bytes[4] = 0xff;
        bytes.truncate(10);
        assert_eq!(parse_frame(&bytes).unwrap_err().kind(), ErrorKind::Corrupted);
    }

    #[test]
    fn future_version_rejected() {
        let mut bytes = obfuscated_frame(&[]);
        bytes[4] = FORMAT_VERSION + 1;
        let err = parse_frame(&bytes).unwrap_err();
        assert!(matches!(
            err,
            PmtpkError::UnsupportedVersion {
                version: 2,
                supported: FORMAT_VERSION
            }
        ));
    }

    #[test]
    fn older_version_accepted() {
        let mut bytes = obfuscated_frame(&[]);
        bytes[4] = 0x00;
        assert_eq!(parse_frame(&bytes).unwrap().version, 0);
    }

    #[test]
    fn inspect_reports_header() {
        let bytes = write_encrypted(&[0x0f; 32], &[0; 16], &[0; 12], &[9; 40]);
        let info = inspect(&bytes).unwrap();
        assert!(info.is_encrypted());
        assert_eq!(info.header_len, ENCRYPTED_HEADER_LEN);
        assert_eq!(info.payload_len, 40);
        assert_eq!(info.content_hash_hex(), "0f".repeat(32));
    }

    #[test]
    fn kind_round_trips_through_tag() {
        for kind in [ContainerKind::Obfuscated, ContainerKind::Encrypted] {
            assert_eq!(ContainerKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ContainerKind::from_tag(0x7f), None);
    }
}
