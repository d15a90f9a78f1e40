//! `.pmtpk` prompt pack containers.
//!
//! A container is a small binary envelope around a JSON-serialized [`Pack`]:
//!
//! ```text
//! [3 bytes: "PPK"][1 byte: tag][1 byte: version][32 bytes: SHA-256(json)]
//! tag 0x00 (obfuscated): [payload: xor(gzip(json))]
//! tag 0x01 (encrypted):  [16 bytes: salt][12 bytes: IV][payload: AES-256-GCM(gzip(json))]
//! ```
//!
//! All operations are pure functions over in-memory buffers and are safe to
//! call concurrently.

pub mod codec;
pub mod compression;
pub mod error;
pub mod format;
pub mod obfuscation;
pub mod options;
pub mod types;

pub use codec::{
    decode, decode_json, decode_pack, encode, encode_json, encode_pack, encrypt_json,
    encrypt_pack, Codec,
};
pub use error::{ErrorKind, PmtpkError, Result};
pub use format::{
    inspect, is_encrypted_container, is_obfuscated_container, sniff, ContainerInfo,
    ContainerKind, ENCRYPTED_HEADER_LEN, FILE_EXTENSION, FORMAT_VERSION, MAGIC,
    OBFUSCATED_HEADER_LEN,
};
pub use obfuscation::OBFUSCATION_KEY;
pub use options::{CodecOptions, DEFAULT_COMPRESSION_LEVEL, DEFAULT_MAX_DECOMPRESSED_SIZE};
pub use types::{Pack, PromptRecord, PACK_VERSION};
