//! Codec configuration.

use serde::{Deserialize, Serialize};

/// gzip's default level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Upper bound on the decompressed JSON size (64 MiB).
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 64 * 1024 * 1024;

/// Options for a [`Codec`](crate::Codec).
///
/// Neither option changes the container format: any level decodes anywhere,
/// and the size limit only applies to this decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecOptions {
    /// gzip level, 0 (store) to 9 (best). Values above 9 are clamped.
    pub compression_level: u32,
    /// Decompressed payloads larger than this fail as corrupted.
    pub max_decompressed_size: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let opts: CodecOptions = serde_json::from_str(r#"{"compressionLevel": 9}"#).unwrap();
        assert_eq!(opts.compression_level, 9);
        assert_eq!(opts.max_decompressed_size, DEFAULT_MAX_DECOMPRESSED_SIZE);
    }

    #[test]
    fn empty_object_is_default() {
        let opts: CodecOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, CodecOptions::default());
    }
}
