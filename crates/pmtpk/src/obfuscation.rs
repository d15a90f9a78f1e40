//! Fixed-key XOR obfuscation.
//!
//! Not a security boundary. The key is public and identical in every peer; it
//! only keeps pack contents from being readable or casually editable in a text
//! editor. Confidentiality comes from the password-encrypted container type.

/// `"PromptPack"`.
pub const OBFUSCATION_KEY: &[u8; 10] = b"PromptPack";

/// XOR `data` with the repeating [`OBFUSCATION_KEY`]. Self-inverse.
pub fn xor_obfuscate(data: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(OBFUSCATION_KEY.iter().cycle())
        .map(|(byte, key)| byte ^ key)
        .collect()
}
