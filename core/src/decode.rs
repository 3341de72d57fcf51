//! Response Decoder: raw body bytes to a `LookupResponse`.
//!
//! Only checks that the body is a JSON object. Interpreting `Response` /
//! `Error` is left to the caller.

use serde_json::Value;

use crate::error::LookupError;
use crate::types::LookupResponse;

/// Maximum number of body bytes echoed back in a `Decode` error.
pub const BODY_PREFIX_LIMIT: usize = 256;

pub fn decode(body: &[u8]) -> Result<LookupResponse, LookupError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| LookupError::Decode {
        message: e.to_string(),
        body_prefix: body_prefix(body),
    })?;

    match value {
        Value::Object(fields) => Ok(LookupResponse::new(fields)),
        other => Err(LookupError::Decode {
            message: format!("expected a JSON object, found {}", kind(&other)),
            body_prefix: body_prefix(body),
        }),
    }
}

fn body_prefix(body: &[u8]) -> String {
    let end = body.len().min(BODY_PREFIX_LIMIT);
    String::from_utf8_lossy(&body[..end]).into_owned()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
