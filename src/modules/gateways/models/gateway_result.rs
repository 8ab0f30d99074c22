use crate::core::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Fields extracted from a successful gateway answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayResponse {
    /// Gateway order id (`orderId`)
    pub payment_id: Option<String>,

    /// Hosted payment page (`formUrl`)
    pub payment_url: Option<String>,

    /// Order state (`orderStatus`)
    pub payment_status: Option<String>,

    /// Body exactly as received
    pub raw_response: String,
}

/// Flattened outcome of one gateway call
///
/// Produced fresh per call. On failure `error` is set and the payment fields are
/// `None`; `raw_response` keeps whatever body the gateway sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResult {
    pub success: bool,
    pub error: Option<String>,
    pub raw_response: Option<String>,
    pub payment_id: Option<String>,
    pub payment_url: Option<String>,
    pub payment_status: Option<String>,
}

impl GatewayResult {
    pub fn failure(error: &AppError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            raw_response: error.raw_response().map(str::to_string),
            payment_id: None,
            payment_url: None,
            payment_status: None,
        }
    }
}

impl From<GatewayResponse> for GatewayResult {
    fn from(response: GatewayResponse) -> Self {
        Self {
            success: true,
            error: None,
            raw_response: Some(response.raw_response),
            payment_id: response.payment_id,
            payment_url: response.payment_url,
            payment_status: response.payment_status,
        }
    }
}

impl From<Result<GatewayResponse>> for GatewayResult {
    fn from(result: Result<GatewayResponse>) -> Self {
        match result {
            Ok(response) => response.into(),
            Err(error) => Self::failure(&error),
        }
    }
}
