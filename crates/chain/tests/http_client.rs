//! HTTP chain client against mock chain and storage provider servers.

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use assert_matches::assert_matches;
use gnfd_chain::{
    BroadcastRequest, CancellationToken, ChainClient, ChainConfig, ChainError, HttpChainClient,
    with_cancel,
};
use gnfd_primitives::{BucketName, CommitmentMode, TxOptions};
use std::time::Duration;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SP_ADDRESS: &str = "0x1111111111111111111111111111111111111111";

fn client(server: &MockServer) -> HttpChainClient {
    let config = ChainConfig {
        rpc_addr: server.uri(),
        sp_endpoint: Some(format!("{}/", server.uri())),
        ..ChainConfig::default()
    };
    HttpChainClient::new(&config, PrivateKeySigner::random()).expect("client build")
}

fn bucket(name: &str) -> BucketName {
    BucketName::new(name).expect("valid bucket")
}

#[tokio::test]
async fn head_bucket_exists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/greenfield/storage/head_bucket/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bucket_info": { "bucket_name": "photos", "id": "42" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server).head_bucket(&bucket("photos")).await.unwrap());
}

#[tokio::test]
async fn head_bucket_missing_by_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/greenfield/storage/head_bucket/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(!client(&server).head_bucket(&bucket("ghost")).await.unwrap());
}

#[tokio::test]
async fn head_bucket_missing_by_grpc_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/greenfield/storage/head_bucket/ghost"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "code": 5,
            "message": "No such bucket: unknown request",
            "details": []
        })))
        .mount(&server)
        .await;

    assert!(!client(&server).head_bucket(&bucket("ghost")).await.unwrap());
}

#[tokio::test]
async fn head_bucket_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/greenfield/storage/head_bucket/photos"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let result = client(&server).head_bucket(&bucket("photos")).await;
    assert_matches!(
        result,
        Err(ChainError::Api { status: 503, ref message, .. }) if message == "maintenance"
    );
}

#[tokio::test]
async fn storage_price_returns_raw_decimals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/greenfield/sp/get_sp_storage_price_by_time/{SP_ADDRESS}/0"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sp_storage_price": {
                "sp_address": SP_ADDRESS,
                "update_time_sec": "1690000000",
                "read_price": "0.087000000000000000",
                "free_read_quota": "1073741824",
                "store_price": "0.048350000000000000"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let address: Address = SP_ADDRESS.parse().unwrap();
    let price = client(&server).storage_price(&address).await.unwrap();
    assert_eq!(price.read_price, "0.087000000000000000");
    assert_eq!(price.store_price, "0.048350000000000000");
}

#[tokio::test]
async fn storage_price_unknown_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 3,
            "message": "storage provider not found"
        })))
        .mount(&server)
        .await;

    let address: Address = SP_ADDRESS.parse().unwrap();
    let result = client(&server).storage_price(&address).await;
    assert_matches!(
        result,
        Err(ChainError::Api { status: 400, ref message, .. })
            if message == "storage provider not found"
    );
}

#[tokio::test]
async fn buy_quota_posts_signed_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/greenfield/tx/broadcast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tx_response": { "txhash": "0xABC", "code": 0, "raw_log": "" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let hash = client
        .buy_quota_for_bucket(&bucket("b1"), 1_000_000, &TxOptions::default())
        .await
        .unwrap();
    assert_eq!(hash.as_str(), "0xABC");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent: BroadcastRequest = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent.mode, CommitmentMode::Inclusion.broadcast_mode());
    assert_eq!(sent.chain_id, "greenfield_1017-1");
    assert_eq!(sent.msg.bucket_name, "b1");
    assert_eq!(sent.msg.charged_read_quota, "1000000");
    assert_eq!(Some(sent.msg.operator), client.address());
    assert_eq!(Some(sent.signer), client.address());
    assert!(sent.signature.starts_with("0x"));
}

#[tokio::test]
async fn unsigned_client_queries_prices() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/greenfield/sp/get_sp_storage_price_by_time/{SP_ADDRESS}/0"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sp_storage_price": { "read_price": "0.001", "store_price": "0.002" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ChainConfig {
        rpc_addr: server.uri(),
        ..ChainConfig::default()
    };
    let client = HttpChainClient::unsigned(&config).unwrap();
    let address: Address = SP_ADDRESS.parse().unwrap();

    let price = client.storage_price(&address).await.unwrap();
    assert_eq!(price.read_price, "0.001");
}

#[tokio::test]
async fn unsigned_client_cannot_buy_quota() {
    let server = MockServer::start().await;
    let config = ChainConfig {
        rpc_addr: server.uri(),
        ..ChainConfig::default()
    };
    let client = HttpChainClient::unsigned(&config).unwrap();

    let result = client
        .buy_quota_for_bucket(&bucket("b1"), 1_000_000, &TxOptions::default())
        .await;

    assert_matches!(result, Err(ChainError::Config(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn buy_quota_rejected_by_chain() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/greenfield/tx/broadcast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tx_response": {
                "txhash": "0xDEF",
                "code": 5,
                "raw_log": "insufficient funds"
            }
        })))
        .mount(&server)
        .await;

    let result = client(&server)
        .buy_quota_for_bucket(&bucket("b1"), 1_000_000, &TxOptions::default())
        .await;
    assert_matches!(
        result,
        Err(ChainError::TxRejected { code: 5, ref log, tx_hash: Some(ref hash) })
            if log == "insufficient funds" && hash == "0xDEF"
    );
}

#[tokio::test]
async fn read_quota_from_storage_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/b1"))
        .and(query_param("year-month", chrono_year_month()))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bucket_name": "b1",
            "read_quota_size": 1000000,
            "sp_free_read_quota_size": "200000",
            "read_consumed_size": 50000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client(&server).bucket_read_quota(&bucket("b1")).await.unwrap();
    assert_eq!(snapshot.charged_quota_size, 1_000_000);
    assert_eq!(snapshot.provider_free_quota_size, 200_000);
    assert_eq!(snapshot.consumed_quota_size, 50_000);
}

#[tokio::test]
async fn read_quota_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<xml/>"))
        .mount(&server)
        .await;

    let result = client(&server).bucket_read_quota(&bucket("b1")).await;
    assert_matches!(result, Err(ChainError::Decode { .. }));
}

#[tokio::test]
async fn transport_failure_is_http_error() {
    let config = ChainConfig {
        rpc_addr: "http://127.0.0.1:1".to_string(),
        ..ChainConfig::default()
    };
    let client = HttpChainClient::new(&config, PrivateKeySigner::random()).unwrap();
    let result = client.head_bucket(&bucket("photos")).await;
    assert_matches!(result, Err(ChainError::Http { .. }));
}

#[tokio::test]
async fn cancellation_aborts_slow_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&server)
        .await;

    let client = client(&server);
    let token = CancellationToken::new();
    let canceller = tokio::spawn({
        let token = token.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        }
    });

    let started = std::time::Instant::now();
    let result = with_cancel(&token, client.head_bucket(&bucket("photos"))).await;
    assert_matches!(result, Err(ChainError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(5));
    canceller.await.unwrap();
}

fn chrono_year_month() -> String {
    chrono::Utc::now().format("%Y-%m").to_string()
}
