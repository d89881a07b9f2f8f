//! # Tokenization and blocking client tests
//!
//! Vault and Apple Pay endpoints served by wiremock.

use paylike_client::{
    BlockingClient, CardDataType, CardExpiry, ClientConfig, ClientError, PaylikeClient,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new("rust-1-vault0")
        .with_vault_url(format!("{}/vault", server.uri()))
        .with_apple_pay_url(format!("{}/applepay/token", server.uri()))
}

async fn vault_token(server: &MockServer, kind: &str, value: &str) {
    Mock::given(method("POST"))
        .and(path("/vault"))
        .and(body_json(json!({ "type": kind, "value": value })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "token": format!("tok-{value}") })),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn tokenize_card_hits_vault_twice() {
    let server = MockServer::start().await;
    vault_token(&server, "pcn", "4100000000000000").await;
    vault_token(&server, "pcsc", "111").await;

    let client = PaylikeClient::with_config(config(&server)).expect("client build");
    let card = client
        .tokenize_card("4100000000000000", "111", CardExpiry::new(12, 2026).expect("expiry"))
        .await
        .expect("tokenize");

    assert_eq!(card.number.token, "tok-4100000000000000");
    assert_eq!(card.code.token, "tok-111");
    assert_eq!(card.expiry.month(), 12);
}

#[tokio::test]
async fn tokenize_apple_pay_uses_its_own_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applepay/token"))
        .and(body_json(json!({ "token": "apple-blob" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-ap" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PaylikeClient::with_config(config(&server)).expect("client build");
    let token = client.tokenize_apple_pay("apple-blob").await.expect("tokenize");
    assert_eq!(token.token, "tok-ap");
}

#[tokio::test]
async fn vault_rejection_is_a_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vault"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Card number is invalid",
            "code": "VALUE_INVALID"
        })))
        .mount(&server)
        .await;

    let client = PaylikeClient::with_config(config(&server)).expect("client build");
    let err = client
        .tokenize_card_data(CardDataType::Pcn, "1")
        .await
        .expect_err("rejected");
    assert!(matches!(err, ClientError::Server { status_code: 422, .. }));
}

#[tokio::test]
async fn vault_garbage_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vault"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let client = PaylikeClient::with_config(config(&server)).expect("client build");
    let err = client
        .tokenize_card_data(CardDataType::Pcsc, "111")
        .await
        .expect_err("malformed");
    assert!(matches!(err, ClientError::MalformedResponse { .. }));
}

// The blocking client owns a runtime, so it is built, used and dropped on
// a blocking thread.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_client_runs_to_completion() {
    let server = MockServer::start().await;
    vault_token(&server, "pcsc", "222").await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "transactionId": "tx-9" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server).with_api_url(server.uri());
    let (token, payment_id) = tokio::task::spawn_blocking(move || {
        let client = BlockingClient::with_config(config).expect("client build");
        let token = client
            .tokenize_card_data(CardDataType::Pcsc, "222")
            .expect("tokenize");

        let card = paylike_client::PaymentCard::new(
            paylike_client::CardToken::new("tok-pcn"),
            token.clone(),
            CardExpiry::new(1, 30).expect("expiry"),
        );
        let mut request = paylike_client::CreatePaymentRequest::with_card("key", card);
        let result = client.create_payment(&mut request).expect("flow");
        (token, result.payment_id().map(String::from))
    })
    .await
    .expect("task");

    assert_eq!(token.token, "tok-222");
    assert_eq!(payment_id.as_deref(), Some("tx-9"));
}
