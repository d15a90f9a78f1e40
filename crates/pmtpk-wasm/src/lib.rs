//! WASM bindings for the `.pmtpk` codec.
//!
//! Lets the browser extension and the edge worker link the same codec as the
//! desktop app instead of carrying their own TypeScript copies.

pub mod codec;
mod error;
