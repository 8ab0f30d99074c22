pub mod models;
pub mod services;

pub use models::{
    Credentials, GatewayResponse, GatewayResult, PaymentRequest, RegisterOrder,
    INCOMPLETE_PAYMENT_DATA,
};
pub use services::{Endpoints, PaymentGateway, SberbankClient, DEFAULT_BASE_URL};
