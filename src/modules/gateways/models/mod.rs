pub mod credentials;
pub mod gateway_result;
pub mod payment_request;

pub use credentials::Credentials;
pub use gateway_result::{GatewayResponse, GatewayResult};
pub use payment_request::{PaymentRequest, RegisterOrder, INCOMPLETE_PAYMENT_DATA};
