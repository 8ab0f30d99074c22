use super::error_classifier::classify;
use super::gateway_trait::PaymentGateway;
use crate::config::GatewayConfig;
use crate::core::{AppError, Result};
use crate::modules::gateways::models::credentials::SECRET_FIELDS;
use crate::modules::gateways::models::{
    Credentials, GatewayResponse, PaymentRequest, RegisterOrder,
};
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::{redirect, Client};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Test environment host of the acquiring API
pub const DEFAULT_BASE_URL: &str = "https://3dsec.sberbank.ru";

const REGISTER_PATH: &str = "payment/rest/register.do";
const REVERSE_PATH: &str = "payment/rest/reverse.do";
const ORDER_STATUS_PATH: &str = "payment/rest/getOrderStatusExtended.do";

const MAX_REDIRECTS: usize = 10;

/// Endpoint URLs derived from the gateway base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub register: String,
    /// Reserved for reversals; no call uses it yet
    pub reverse: String,
    pub order_status: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        let base = format!("{}/", base_url.trim_end_matches('/'));
        Self {
            register: format!("{}{}", base, REGISTER_PATH),
            reverse: format!("{}{}", base, REVERSE_PATH),
            order_status: format!("{}{}", base, ORDER_STATUS_PATH),
        }
    }
}

/// Sberbank REST acquiring client
///
/// Implements PaymentGateway for the Sberbank acquiring API.
/// API Documentation: https://securepayments.sberbank.ru/wiki/doku.php/integration:api:rest:start
///
/// Holds no per-call state: every call returns its own result.
pub struct SberbankClient {
    client: Client,
    credentials: Credentials,
    endpoints: Endpoints,
}

impl SberbankClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `config` - credentials, base URL, timeout and TLS policy
    ///
    /// # Errors
    /// `AppError::Configuration` if the config fails [`GatewayConfig::validate`],
    /// `AppError::HttpClient` if the HTTP client cannot be built.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        config.validate()?;

        if config.accept_invalid_certs {
            warn!("TLS certificate verification disabled for the acquiring gateway");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            credentials: config.credentials,
            endpoints: Endpoints::new(&config.base_url),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env()?)
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn is_token_auth(&self) -> bool {
        self.credentials.is_token_auth()
    }

    /// Look an order up by merchant order number instead of gateway id
    pub async fn order_status_by_number(&self, order_number: &str) -> Result<GatewayResponse> {
        info!(order_number = %order_number, "Querying Sberbank order status");

        let fields = vec![("orderNumber".to_string(), order_number.to_string())];
        self.send_request(&self.endpoints.order_status, fields).await
    }

    /// POST form fields plus credentials to `endpoint` and classify the answer
    async fn send_request(
        &self,
        endpoint: &str,
        mut fields: Vec<(String, String)>,
    ) -> Result<GatewayResponse> {
        fields.extend(self.credentials.form_fields());
        let payload = redacted_payload(&fields);

        let transport_error = |raw_response: Option<String>| AppError::Transport {
            endpoint: endpoint.to_string(),
            payload: payload.clone(),
            raw_response,
        };

        let response = self
            .client
            .post(endpoint)
            .header(CACHE_CONTROL, "no-cache")
            .form(&fields)
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %endpoint, error = %e, "Sberbank request failed");
                transport_error(None)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(endpoint = %endpoint, error = %e, "Failed to read Sberbank response");
            transport_error(None)
        })?;

        // The API answers errors with HTTP 200 as well, so the status is only logged
        debug!(endpoint = %endpoint, status = %status, body = %body, "Sberbank response");

        match serde_json::from_str::<Value>(&body) {
            Ok(json) if json.is_object() => classify(&json, body),
            _ => {
                error!(endpoint = %endpoint, status = %status, "Sberbank response is not a JSON object");
                Err(transport_error(Some(body)))
            }
        }
    }
}

/// Form-encoded payload with secret values masked, for diagnostics
fn redacted_payload(fields: &[(String, String)]) -> String {
    let masked: Vec<(&str, &str)> = fields
        .iter()
        .map(|(key, value)| {
            if SECRET_FIELDS.contains(&key.as_str()) {
                (key.as_str(), "***")
            } else {
                (key.as_str(), value.as_str())
            }
        })
        .collect();

    serde_urlencoded::to_string(masked).unwrap_or_default()
}

#[async_trait]
impl PaymentGateway for SberbankClient {
    async fn register_order(&self, request: PaymentRequest) -> Result<GatewayResponse> {
        let order = RegisterOrder::try_from(request)
            .inspect_err(|e| warn!(error = %e, "Rejected payment request"))?;

        debug!(order = ?order, "Registering Sberbank order");

        match self
            .send_request(&self.endpoints.register, order.form_fields())
            .await
        {
            Ok(response) => {
                info!(
                    order_number = %order.order_number,
                    payment_id = ?response.payment_id,
                    "Sberbank order registered"
                );
                Ok(response)
            }
            Err(e) => {
                warn!(order_number = %order.order_number, error = %e, "Sberbank order registration failed");
                Err(e)
            }
        }
    }

    async fn order_status(&self, payment_id: &str) -> Result<GatewayResponse> {
        info!(payment_id = %payment_id, "Querying Sberbank order status");

        let fields = vec![("orderId".to_string(), payment_id.to_string())];
        let response = self
            .send_request(&self.endpoints.order_status, fields)
            .await?;

        info!(
            payment_id = %payment_id,
            payment_status = ?response.payment_status,
            "Sberbank order status received"
        );
        Ok(response)
    }

    fn name(&self) -> &str {
        "sberbank"
    }
}
