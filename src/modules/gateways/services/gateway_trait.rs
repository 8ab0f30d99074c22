use crate::core::{AppError, Result};
use crate::modules::gateways::models::{GatewayResponse, GatewayResult, PaymentRequest};
use async_trait::async_trait;

/// Payment gateway trait for registering orders and reading their state
///
/// Implementors provide the `Result`-returning calls; the flattened
/// `GatewayResult` variants are derived from them.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Register an order and obtain the hosted payment page
    async fn register_order(&self, request: PaymentRequest) -> Result<GatewayResponse>;

    /// Read the current state of a registered order
    async fn order_status(&self, payment_id: &str) -> Result<GatewayResponse>;

    /// Reverse a payment
    async fn cancel_order(&self, _payment_id: &str) -> Result<GatewayResponse> {
        Err(AppError::NotImplemented("payment cancellation".to_string()))
    }

    /// Get gateway name
    fn name(&self) -> &str;

    async fn initiate_payment(&self, request: PaymentRequest) -> GatewayResult {
        self.register_order(request).await.into()
    }

    async fn get_payment_state(&self, payment_id: &str) -> GatewayResult {
        self.order_status(payment_id).await.into()
    }

    async fn cancel_payment(&self, payment_id: &str) -> GatewayResult {
        self.cancel_order(payment_id).await.into()
    }
}
