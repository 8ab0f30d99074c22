// Integration test for transport failures
//
// Unreachable gateways and bodies that are not JSON objects all collapse into the
// "Can't create connection" result, without leaking credentials.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use sberpay::gateways::{Credentials, PaymentGateway};
use std::net::TcpListener;

/// Address nothing listens on
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind local socket");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[actix_web::test]
async fn test_connection_refused() {
    let base_url = closed_port_url();
    let client = client_for(&base_url, Credentials::Token(TEST_TOKEN.to_string()));

    let result = client.get_payment_state("abc").await;

    assert!(!result.success);
    let error = result.error.expect("error text");
    assert!(
        error.starts_with(&format!(
            "Can't create connection to: {}/payment/rest/getOrderStatusExtended.do | with data: ",
            base_url
        )),
        "unexpected error: {}",
        error
    );
    assert!(error.contains("orderId=abc"));
    assert!(!error.contains(TEST_TOKEN));
    assert!(result.raw_response.is_none());
}

#[actix_web::test]
async fn test_html_body_is_transport_failure() {
    let html = "<html><body>502 Bad Gateway</body></html>";
    let gateway = FakeGateway::start(vec![(REGISTER_PATH, Reply::Raw(502, html.to_string()))]);
    let client = password_client(&gateway);

    let result = client.initiate_payment(sample_request()).await;

    assert!(!result.success);
    let error = result.error.expect("error text");
    assert!(error.starts_with("Can't create connection to: "));
    assert!(error.contains("payment/rest/register.do"));
    assert!(error.contains("userName=shop-api"));
    assert!(!error.contains("s3cr3t"));
    assert_eq!(result.raw_response.as_deref(), Some(html));
    assert!(result.payment_id.is_none());
}

#[actix_web::test]
async fn test_json_that_is_not_an_object() {
    let gateway = FakeGateway::start(vec![(ORDER_STATUS_PATH, Reply::json("[]"))]);
    let client = token_client(&gateway);

    let result = client.get_payment_state("abc").await;

    assert!(!result.success);
    assert!(result
        .error
        .as_deref()
        .is_some_and(|e| e.starts_with("Can't create connection to: ")));
    assert_eq!(result.raw_response.as_deref(), Some("[]"));
}

#[actix_web::test]
async fn test_http_status_is_not_inspected() {
    // error payload with a 500 status is still a gateway error, not a transport one
    let body = r#"{"errorCode":5,"errorMessage":"Access denied"}"#;
    let gateway = FakeGateway::start(vec![(ORDER_STATUS_PATH, Reply::Raw(500, body.to_string()))]);
    let client = token_client(&gateway);

    let result = client.get_payment_state("abc").await;

    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Error code: 5 | Message: Access denied")
    );
}

#[actix_web::test]
async fn test_unknown_path_is_transport_failure() {
    // fake gateway answers nothing on the register path: empty 404 body
    let gateway = FakeGateway::start(vec![]);
    let client = token_client(&gateway);

    let result = client.initiate_payment(sample_request()).await;

    assert!(!result.success);
    assert!(result
        .error
        .as_deref()
        .is_some_and(|e| e.contains("register.do")));
    assert_eq!(gateway.requests().len(), 1);
}
