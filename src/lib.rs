//! Sberbank acquiring client library
//!
//! Registers orders and queries their state through the Sberbank REST acquiring API.
//! Every gateway answer, whatever its shape, is normalized into one `GatewayResult`.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::gateways;
pub use modules::gateways::{GatewayResult, PaymentGateway, PaymentRequest, SberbankClient};
