//! gzip adapter.
//!
//! Output is standard gzip (RFC 1952) so browser `CompressionStream('gzip')`
//! peers can read it and vice versa. The header's mtime is left at zero, which
//! keeps obfuscated containers byte-for-byte deterministic.

use std::io::{Read, Write};

use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{PmtpkError, Result};

/// Compress `data` as a single gzip member.
pub fn gzip_compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level.min(9)));
    encoder
        .write_all(data)
        .map_err(|e| PmtpkError::Encode(format!("gzip: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| PmtpkError::Encode(format!("gzip: {}", e)))
}

/// Decompress one gzip member, refusing output larger than `limit` bytes.
///
/// Malformed input, CRC/length trailer mismatches, bytes after the member
/// and oversized output all fail as [`PmtpkError::Corrupted`].
pub fn gzip_decompress(data: &[u8], limit: usize) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data).take((limit as u64).saturating_add(1));
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| PmtpkError::Corrupted(format!("decompression failed: {}", e)))?;
    if out.len() > limit {
        return Err(PmtpkError::Corrupted(format!(
            "decompressed payload exceeds {} bytes",
            limit
        )));
    }

    // The slice reader is advanced exactly past the gzip trailer.
    let rest = decoder.into_inner().into_inner();
    if !rest.is_empty() {
        return Err(PmtpkError::Corrupted(format!(
            "{} trailing bytes after gzip data",
            rest.len()
        )));
    }
    Ok(out)
}
