//! Encoding and decoding between [`Pack`]s and container bytes.
//!
//! Encode: JSON → SHA-256 → gzip → XOR or AES-256-GCM → frame.
//! Decode: frame → XOR or AES-256-GCM → gunzip → verify SHA-256 → JSON.

use pmtpk_crypto::{
    aes_gcm_decrypt, aes_gcm_encrypt, derive_key, generate_iv, generate_salt, sha256,
};
use zeroize::Zeroize;

use crate::compression::{gzip_compress, gzip_decompress};
use crate::error::{PmtpkError, Result};
use crate::format::{parse_frame, write_encrypted, write_obfuscated, KeyParams};
use crate::obfuscation::xor_obfuscate;
use crate::options::CodecOptions;
use crate::types::Pack;

/// A configured `.pmtpk` encoder/decoder.
///
/// Holds only immutable options; one value can be shared across threads and
/// used for any number of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    options: CodecOptions,
}

impl Codec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Encode a pack. `None` produces an obfuscated container, `Some` an
    /// encrypted one.
    ///
    /// Obfuscated output is deterministic. Encrypted output uses a fresh salt
    /// and IV on every call.
    pub fn encode(&self, pack: &Pack, passphrase: Option<&str>) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(pack)
            .map_err(|e| PmtpkError::Encode(format!("pack serialization: {}", e)))?;
        self.seal(&json, passphrase)
    }

    /// Decode a container of either type into a pack.
    ///
    /// The passphrase is ignored for obfuscated containers and required for
    /// encrypted ones.
    pub fn decode(&self, data: &[u8], passphrase: Option<&str>) -> Result<Pack> {
        let json = self.open(data, passphrase)?;
        parse_pack(&json)
    }

    /// Encode the default, password-free form.
    pub fn encode_pack(&self, pack: &Pack) -> Result<Vec<u8>> {
        self.encode(pack, None)
    }

    /// Encode the password-encrypted form.
    pub fn encrypt_pack(&self, pack: &Pack, passphrase: &str) -> Result<Vec<u8>> {
        self.encode(pack, Some(passphrase))
    }

    /// Sniff the container type and decode it.
    ///
    /// Foreign or unknown magic fails with `InvalidFormat` before anything
    /// else is examined.
    pub fn decode_pack(&self, data: &[u8], passphrase: Option<&str>) -> Result<Pack> {
        self.decode(data, passphrase)
    }

    /// Frame arbitrary JSON text as an obfuscated container.
    ///
    /// The text is stored byte-for-byte; it is not parsed or re-serialized.
    pub fn encode_json(&self, json: &str) -> Result<Vec<u8>> {
        self.seal(json.as_bytes(), None)
    }

    /// Frame arbitrary JSON text as an encrypted container.
    pub fn encrypt_json(&self, json: &str, passphrase: &str) -> Result<Vec<u8>> {
        self.seal(json.as_bytes(), Some(passphrase))
    }

    /// Open a container and return its verified JSON text without parsing it.
    pub fn decode_json(&self, data: &[u8], passphrase: Option<&str>) -> Result<String> {
        let json = self.open(data, passphrase)?;
        String::from_utf8(json)
            .map_err(|_| PmtpkError::InvalidFormat("payload is not valid UTF-8".to_string()))
    }

    fn seal(&self, json: &[u8], passphrase: Option<&str>) -> Result<Vec<u8>> {
        if passphrase == Some("") {
            return Err(PmtpkError::EmptyPassphrase);
        }

        let content_hash = sha256(json);
        let compressed = gzip_compress(json, self.options.compression_level)?;

        let container = match passphrase {
            Some(passphrase) => {
                let salt = generate_salt()?;
                let iv = generate_iv()?;
                let mut key = derive_key(passphrase, &salt);
                let ciphertext = aes_gcm_encrypt(&key, &iv, &compressed);
                key.zeroize();
                write_encrypted(&content_hash, &salt, &iv, &ciphertext?)
            }
            None => write_obfuscated(&content_hash, &xor_obfuscate(&compressed)),
        };

        tracing::debug!(
            encrypted = passphrase.is_some(),
            json_len = json.len(),
            container_len = container.len(),
            "encoded pmtpk container"
        );
        Ok(container)
    }

    fn open(&self, data: &[u8], passphrase: Option<&str>) -> Result<Vec<u8>> {
        let frame = parse_frame(data)?;

        let compressed = match frame.key_params {
            Some(params) => {
                let passphrase = passphrase
                    .filter(|p| !p.is_empty())
                    .ok_or(PmtpkError::PasswordRequired)?;
                decrypt_payload(passphrase, params, frame.payload)?
            }
            None => xor_obfuscate(frame.payload),
        };

        let json = gzip_decompress(&compressed, self.options.max_decompressed_size)?;
        if sha256(&json) != frame.content_hash {
            tracing::warn!(kind = %frame.kind, "pmtpk content hash mismatch");
            return Err(PmtpkError::Corrupted("hash mismatch".to_string()));
        }

        tracing::debug!(
            kind = %frame.kind,
            version = frame.version,
            json_len = json.len(),
            "decoded pmtpk container"
        );
        Ok(json)
    }
}

/// Derive the key and authenticate-decrypt. Every failure is `WrongPassword`:
/// a bad passphrase and a modified salt, IV or ciphertext look the same.
fn decrypt_payload(passphrase: &str, params: KeyParams<'_>, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let mut key = derive_key(passphrase, params.salt);
    let plaintext = aes_gcm_decrypt(&key, params.iv, ciphertext);
    key.zeroize();
    plaintext.map_err(|_| {
        tracing::debug!("pmtpk decryption failed");
        PmtpkError::WrongPassword
    })
}

fn parse_pack(json: &[u8]) -> Result<Pack> {
    let text = std::str::from_utf8(json)
        .map_err(|_| PmtpkError::InvalidFormat("payload is not valid UTF-8".to_string()))?;
    serde_json::from_str(text)
        .map_err(|e| PmtpkError::InvalidFormat(format!("not a prompt pack: {}", e)))
}

/// Encode with default options. See [`Codec::encode`].
pub fn encode(pack: &Pack, passphrase: Option<&str>) -> Result<Vec<u8>> {
    Codec::default().encode(pack, passphrase)
}

/// Decode with default options. See [`Codec::decode`].
pub fn decode(data: &[u8], passphrase: Option<&str>) -> Result<Pack> {
    Codec::default().decode(data, passphrase)
}

/// Encode the obfuscated form with default options.
pub fn encode_pack(pack: &Pack) -> Result<Vec<u8>> {
    Codec::default().encode_pack(pack)
}

/// Encode the encrypted form with default options.
pub fn encrypt_pack(pack: &Pack, passphrase: &str) -> Result<Vec<u8>> {
    Codec::default().encrypt_pack(pack, passphrase)
}

/// Decode either container type with default options.
pub fn decode_pack(data: &[u8], passphrase: Option<&str>) -> Result<Pack> {
    Codec::default().decode_pack(data, passphrase)
}

/// Frame JSON text as an obfuscated container with default options.
pub fn encode_json(json: &str) -> Result<Vec<u8>> {
    Codec::default().encode_json(json)
}

/// Frame JSON text as an encrypted container with default options.
pub fn encrypt_json(json: &str, passphrase: &str) -> Result<Vec<u8>> {
    Codec::default().encrypt_json(json, passphrase)
}

/// Open a container to its JSON text with default options.
pub fn decode_json(data: &[u8], passphrase: Option<&str>) -> Result<String> {
    Codec::default().decode_json(data, passphrase)
}
