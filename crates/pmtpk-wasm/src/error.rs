//! Error conversion for WASM boundary.

use pmtpk::PmtpkError;
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Convert a codec error into a JS `Error` named `PmtpkError`.
///
/// Carries `code` (e.g. `"WRONG_PASSWORD"`) and `passwordRequired` so callers
/// branch on the error kind instead of the message text.
pub fn to_js_error(e: PmtpkError) -> JsValue {
    let err = js_sys::Error::new(&e.to_string());
    err.set_name("PmtpkError");
    let _ = js_sys::Reflect::set(&err, &"code".into(), &e.kind().code().into());
    let _ = js_sys::Reflect::set(
        &err,
        &"passwordRequired".into(),
        &JsValue::from_bool(e.is_password_required()),
    );
    err.into()
}

/// Serialize a Rust value to a JS value, using plain objects instead of Maps.
pub fn to_js_value(value: &impl Serialize) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| to_js_error(PmtpkError::Encode(e.to_string())))
}
