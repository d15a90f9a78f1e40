//! WASM bindings for pmtpk.

use crate::error::{to_js_error, to_js_value};
use pmtpk::{
    decode_json, decode_pack, encode_json, encode_pack, encrypt_json, encrypt_pack, inspect,
    is_encrypted_container, is_obfuscated_container, ContainerInfo, Pack, PmtpkError,
    FILE_EXTENSION, FORMAT_VERSION,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// --- Constants ---

#[wasm_bindgen(js_name = "FORMAT_VERSION")]
pub fn format_version() -> u8 {
    FORMAT_VERSION
}

#[wasm_bindgen(js_name = "FILE_EXTENSION")]
pub fn file_extension() -> String {
    FILE_EXTENSION.to_string()
}

// --- Sniffing ---

#[wasm_bindgen(js_name = "isObfuscated")]
pub fn wasm_is_obfuscated(data: &[u8]) -> bool {
    is_obfuscated_container(data)
}

#[wasm_bindgen(js_name = "isEncrypted")]
pub fn wasm_is_encrypted(data: &[u8]) -> bool {
    is_encrypted_container(data)
}

/// Header summary handed to JS by `inspectPmtpk`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectResult {
    pub kind: &'static str,
    pub encrypted: bool,
    pub version: u8,
    pub content_hash: String,
    pub header_length: usize,
    pub payload_length: usize,
}

impl From<ContainerInfo> for InspectResult {
    fn from(info: ContainerInfo) -> Self {
        Self {
            kind: info.kind.as_str(),
            encrypted: info.is_encrypted(),
            version: info.version,
            content_hash: info.content_hash_hex(),
            header_length: info.header_len,
            payload_length: info.payload_len,
        }
    }
}

#[wasm_bindgen(js_name = "inspectPmtpk")]
pub fn wasm_inspect(data: &[u8]) -> Result<JsValue, JsValue> {
    let info = inspect(data).map_err(to_js_error)?;
    to_js_value(&InspectResult::from(info))
}

// --- Packs ---

fn pack_from_js(pack: JsValue) -> Result<Pack, JsValue> {
    serde_wasm_bindgen::from_value(pack)
        .map_err(|e| to_js_error(PmtpkError::InvalidFormat(e.to_string())))
}

#[wasm_bindgen(js_name = "encodePack")]
pub fn wasm_encode_pack(pack: JsValue) -> Result<Vec<u8>, JsValue> {
    encode_pack(&pack_from_js(pack)?).map_err(to_js_error)
}

#[wasm_bindgen(js_name = "encryptPack")]
pub fn wasm_encrypt_pack(pack: JsValue, password: &str) -> Result<Vec<u8>, JsValue> {
    encrypt_pack(&pack_from_js(pack)?, password).map_err(to_js_error)
}

#[wasm_bindgen(js_name = "decodePack")]
pub fn wasm_decode_pack(data: &[u8], password: Option<String>) -> Result<JsValue, JsValue> {
    let pack = decode_pack(data, password.as_deref()).map_err(to_js_error)?;
    to_js_value(&pack)
}

// --- Raw JSON ---

#[wasm_bindgen(js_name = "encodePmtpk")]
pub fn wasm_encode_pmtpk(json: &str) -> Result<Vec<u8>, JsValue> {
    encode_json(json).map_err(to_js_error)
}

#[wasm_bindgen(js_name = "encryptPmtpk")]
pub fn wasm_encrypt_pmtpk(json: &str, password: &str) -> Result<Vec<u8>, JsValue> {
    encrypt_json(json, password).map_err(to_js_error)
}

#[wasm_bindgen(js_name = "decodePmtpk")]
pub fn wasm_decode_pmtpk(data: &[u8], password: Option<String>) -> Result<String, JsValue> {
    decode_json(data, password.as_deref()).map_err(to_js_error)
}

#[wasm_bindgen(js_name = "decryptPmtpk")]
pub fn wasm_decrypt_pmtpk(data: &[u8], password: &str) -> Result<String, JsValue> {
    decode_json(data, Some(password)).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_result_shape() {
        let bytes = encode_pack(&Pack::with_timestamp(0, vec![])).unwrap();
        let result = InspectResult::from(inspect(&bytes).unwrap());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["kind"], "obfuscated");
        assert_eq!(value["encrypted"], false);
        assert_eq!(value["version"], 1);
        assert_eq!(value["headerLength"], 37);
        assert_eq!(value["contentHash"].as_str().unwrap().len(), 64);
    }
}
