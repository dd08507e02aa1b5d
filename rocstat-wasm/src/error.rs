//! JSON result wrapper for the WASM boundary.
//!
//! Every public function in `rocstat-wasm` returns a `String` containing JSON.
//! Success → `{"ok": <value>}`, failure → `{"error": "<message>"}`.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Both response shapes. External tagging yields `{"ok": ..}` and
/// `{"error": ".."}` directly.
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Envelope<'a, T: Serialize> {
    Ok(&'a T),
    Error(String),
}

const FALLBACK: &str = r#"{"error":"serialization failed"}"#;

/// Serialize a success value as `{"ok": val}`.
pub fn wasm_ok<T: Serialize>(val: &T) -> String {
    serde_json::to_string(&Envelope::Ok(val)).unwrap_or_else(wasm_err)
}

/// Serialize an error as `{"error": "msg"}`.
pub fn wasm_err(msg: impl Display) -> String {
    serde_json::to_string(&Envelope::<()>::Error(msg.to_string()))
        .unwrap_or_else(|_| FALLBACK.into())
}

/// Map any `Result` with a displayable error into the JSON envelope.
pub fn wasm_result<T: Serialize, E: Display>(r: Result<T, E>) -> String {
    match r {
        Ok(val) => wasm_ok(&val),
        Err(e) => wasm_err(e),
    }
}

/// Parse a JSON argument, naming it in the error message.
pub(crate) fn parse_json<T: DeserializeOwned>(what: &str, json: &str) -> Result<T, String> {
    serde_json::from_str::<T>(json).map_err(|e| format!("invalid {what}: {e}"))
}
