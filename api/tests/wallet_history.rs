use api::error::FALLBACK_MESSAGE;
use api::AppConfig;
use api::ApiError;
use api::HistoryClient;
use api::HistoryForm;
use api::Network;
use httpmock::{Method, MockServer};
use serde_json::json;

fn record(hash: &str, value: &str) -> serde_json::Value {
    json!({
        "model": {
            "block_hash": "0xb10c",
            "block_height": "100",
            "from_address_id": "0xfrom",
            "to_address_id": "0xto",
            "network_id": "base-sepolia",
            "status": "complete",
            "transaction_hash": hash,
            "transaction_link": format!("https://sepolia.basescan.org/tx/{hash}"),
            "unsigned_payload": "",
            "content": {
                "block_timestamp": "2024-05-01T12:00:00Z",
                "token_transfers": [{
                    "contract_address": "0xusdc",
                    "from_address": "0xfrom",
                    "to_address": "0xto",
                    "log_index": 0,
                    "token_transfer_type": "erc20",
                    "value": value
                }]
            }
        }
    })
}

fn client_for(server: &MockServer) -> HistoryClient {
    // Trailing slash must not produce `//wallet-history/`.
    HistoryClient::new(&AppConfig::new(format!("{}/", server.base_url())))
}

fn filled_form() -> HistoryForm {
    let mut form = HistoryForm::default();
    form.set_wallet_address("0xsOmEAdDrEsS");
    form.set_network(Network::BaseSepolia);
    form.set_limit_input("25");
    form
}

#[tokio::test]
async fn posts_form_state_and_decodes_records() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/wallet-history/")
                .header("content-type", "application/json")
                .json_body(json!({
                    "limit": 25,
                    "walletAddress": "0xsOmEAdDrEsS",
                    "network": "base-sepolia"
                }));
            then.status(200)
                .json_body(json!([record("0xaaa", "5000000"), record("0xbbb", "1500000")]));
        })
        .await;

    let request = filled_form().to_request().unwrap();
    let items = client_for(&server).wallet_history(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].model.transaction_hash, "0xaaa");
    assert_eq!(items[1].first_transfer().unwrap().value, "1500000");
}

#[tokio::test]
async fn empty_array_is_a_successful_empty_history() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/wallet-history/");
            then.status(200).json_body(json!([]));
        })
        .await;

    let request = filled_form().to_request().unwrap();
    let items = client_for(&server).wallet_history(&request).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn server_message_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/wallet-history/");
            then.status(400).body("Invalid address");
        })
        .await;

    let request = filled_form().to_request().unwrap();
    let err = client_for(&server)
        .wallet_history(&request)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Server {
            status: 400,
            message: Some("Invalid address".to_string())
        }
    );
    assert_eq!(err.notification_text(), "Invalid address");
}

#[tokio::test]
async fn empty_error_body_uses_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/wallet-history/");
            then.status(502);
        })
        .await;

    let request = filled_form().to_request().unwrap();
    let err = client_for(&server)
        .wallet_history(&request)
        .await
        .unwrap_err();

    assert_eq!(err.notification_text(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn non_array_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/wallet-history/");
            then.status(200).json_body(json!({"unexpected": true}));
        })
        .await;

    let request = filled_form().to_request().unwrap();
    let err = client_for(&server)
        .wallet_history(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
    assert_eq!(err.notification_text(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Nothing listens on port 9 (discard) on a test machine.
    let client = HistoryClient::new(&AppConfig::new("http://127.0.0.1:9"));
    let request = filled_form().to_request().unwrap();

    let err = client.wallet_history(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
    assert_eq!(err.notification_text(), FALLBACK_MESSAGE);
}
