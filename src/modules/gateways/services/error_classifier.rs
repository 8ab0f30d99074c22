//! Classification of decoded gateway answers
//!
//! The acquiring API reports errors in several shapes depending on the endpoint and
//! API generation. Keys are looked up in a fixed order and the first present one wins.

use crate::core::{AppError, Result};
use crate::modules::gateways::models::GatewayResponse;
use serde_json::Value;

/// Message used when the gateway reports a code without any text
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error.";

const ERROR_CODE_PATHS: [&[&str]; 3] = [&["errorCode"], &["ErrorCode"], &["error", "code"]];

const ERROR_MESSAGE_PATHS: [&[&str]; 4] = [
    &["errorMessage"],
    &["ErrorMessage"],
    &["error", "message"],
    &["error", "description"],
];

/// First non-null value found along `paths`
fn first_present<'a>(body: &'a Value, paths: &[&[&str]]) -> Option<&'a Value> {
    paths.iter().find_map(|path| {
        path.iter()
            .try_fold(body, |node, key| node.get(*key))
            .filter(|value| !value.is_null())
    })
}

/// Integer reading of a code value; anything non-numeric counts as `0`
fn as_code(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// Text of a scalar field; strings are taken verbatim, other JSON is rendered
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Error code reported in `body`, `0` when there is none
pub fn error_code(body: &Value) -> i64 {
    first_present(body, &ERROR_CODE_PATHS).map_or(0, as_code)
}

/// Error message reported in `body`, or [`UNKNOWN_ERROR_MESSAGE`]
pub fn error_message(body: &Value) -> String {
    first_present(body, &ERROR_MESSAGE_PATHS)
        .map(as_text)
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
}

fn field(body: &Value, key: &str) -> Option<String> {
    body.get(key).filter(|value| !value.is_null()).map(as_text)
}

/// Classify a decoded gateway answer
///
/// A non-zero error code yields [`AppError::Gateway`]; identifiers are not read from
/// error answers. Otherwise `orderId`, `formUrl` and `orderStatus` are extracted from
/// the top level, each left `None` when absent.
pub fn classify(body: &Value, raw_response: String) -> Result<GatewayResponse> {
    let code = error_code(body);
    if code != 0 {
        return Err(AppError::Gateway {
            code,
            message: error_message(body),
            raw_response,
        });
    }

    Ok(GatewayResponse {
        payment_id: field(body, "orderId"),
        payment_url: field(body, "formUrl"),
        payment_status: field(body, "orderStatus"),
        raw_response,
    })
}
