pub mod error_classifier;
pub mod gateway_trait;
pub mod sberbank;

pub use gateway_trait::PaymentGateway;
pub use sberbank::{Endpoints, SberbankClient, DEFAULT_BASE_URL};
