use crate::core::amount::{to_minor_units, truncate_description};
use crate::core::{AppError, Currency, Result};
use crate::modules::gateways::models::credentials::SECRET_FIELDS;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Error text for a request missing any required key
pub const INCOMPLETE_PAYMENT_DATA: &str = "Incomplete payment data";

/// Form keys owned by the client; pass-through parameters may not override them
const RESERVED_FIELDS: [&str; 8] = [
    "orderNumber",
    "amount",
    "currency",
    "returnUrl",
    "failUrl",
    "description",
    "language",
    "userName",
];

/// Caller-facing payment data for order registration
///
/// Mirrors the loosely-typed mapping merchants build: every key is optional here and
/// checked by [`RegisterOrder::try_from`]. Unknown keys land in `extra` and are
/// forwarded to the gateway verbatim, whatever their JSON type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Merchant order number, unique per merchant
    pub order_number: Option<String>,

    /// Amount in major units (rubles, dollars)
    pub amount: Option<Decimal>,

    /// Redirect after successful payment
    pub return_url: Option<String>,

    /// Redirect after failed payment
    pub fail_url: Option<String>,

    pub description: Option<String>,

    /// Payment page language (e.g. `ru`, `en`)
    pub language: Option<String>,

    /// ISO 4217 alpha code; the home currency when absent
    pub currency: Option<String>,

    /// Additional `register.do` parameters (`jsonParams`, `sessionTimeoutSecs`, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PaymentRequest {
    /// Request with all required keys set
    pub fn new(
        order_number: impl Into<String>,
        amount: Decimal,
        return_url: impl Into<String>,
        fail_url: impl Into<String>,
        description: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            order_number: Some(order_number.into()),
            amount: Some(amount),
            return_url: Some(return_url.into()),
            fail_url: Some(fail_url.into()),
            description: Some(description.into()),
            language: Some(language.into()),
            currency: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Add a pass-through gateway parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registration request after validation and wire transforms
///
/// This is exactly what goes on the wire minus credentials, so it is safe to log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterOrder {
    pub order_number: String,

    /// Amount in minor units
    pub amount: i64,

    /// ISO 4217 numeric code
    pub currency: u16,

    pub return_url: String,
    pub fail_url: String,

    /// At most 24 characters
    pub description: String,

    pub language: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl TryFrom<PaymentRequest> for RegisterOrder {
    type Error = AppError;

    fn try_from(request: PaymentRequest) -> Result<Self> {
        let PaymentRequest {
            order_number: Some(order_number),
            amount: Some(amount),
            return_url: Some(return_url),
            fail_url: Some(fail_url),
            description: Some(description),
            language: Some(language),
            currency,
            extra,
        } = request
        else {
            return Err(AppError::validation(INCOMPLETE_PAYMENT_DATA));
        };

        let currency = match currency {
            Some(code) => code.parse::<Currency>()?,
            None => Currency::default(),
        };

        Ok(RegisterOrder {
            order_number,
            amount: to_minor_units(amount)?,
            currency: currency.numeric_code(),
            return_url,
            fail_url,
            description: truncate_description(&description),
            language,
            extra,
        })
    }
}

impl RegisterOrder {
    /// Form fields for `register.do`, credentials excluded
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("orderNumber".to_string(), self.order_number.clone()),
            ("amount".to_string(), self.amount.to_string()),
            ("currency".to_string(), self.currency.to_string()),
            ("returnUrl".to_string(), self.return_url.clone()),
            ("failUrl".to_string(), self.fail_url.clone()),
            ("description".to_string(), self.description.clone()),
            ("language".to_string(), self.language.clone()),
        ];

        fields.extend(
            self.extra
                .iter()
                .filter(|(key, _)| {
                    !RESERVED_FIELDS.contains(&key.as_str()) && !SECRET_FIELDS.contains(&key.as_str())
                })
                .filter_map(|(key, value)| form_value(value).map(|value| (key.clone(), value))),
        );

        fields
    }
}

/// Form rendering of a pass-through value: strings verbatim, other JSON as text, null dropped
fn form_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
