//! End-to-end tests of `CoinCapClient` over the reqwest transport, served by a
//! local one-shot HTTP server.

use coincap_client::{ClientConfig, ClientError, CoinCapClient};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const ASSETS_BODY: &str = r#"{"data":[{"id":"bitcoin","rank":"1","symbol":"BTC","name":"Bitcoin","supply":"19000000","maxSupply":"21000000","marketCapUsd":"1000000000000","volumeUsd24Hr":"50000000000","priceUsd":"52000.12"},{"id":"ethereum","rank":"2","symbol":"ETH","name":"Ethereum","supply":"120000000","maxSupply":null,"marketCapUsd":"360000000000","volumeUsd24Hr":"20000000000","priceUsd":"3000.5"}],"timestamp":1700000000000}"#;

/// Serves one connection with a canned response and returns the request head.
///
/// With `delay` set, the server waits that long before answering.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
    delay: Option<Duration>,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        // The client may already have hung up after a timeout
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{}/v3", addr), handle)
}

fn client_for(base_url: &str, timeout: Duration) -> CoinCapClient {
    let config = ClientConfig::new(timeout, "integration-token").with_base_url(base_url);
    CoinCapClient::from_config(config).unwrap()
}

#[tokio::test]
async fn test_fetch_assets_over_http() {
    let (base_url, server) = serve_once("200 OK", ASSETS_BODY, None).await;
    let client = client_for(&base_url, Duration::from_secs(5));

    let assets = client.fetch_assets().await.unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].id, "bitcoin");
    assert_eq!(assets[1].id, "ethereum");
    assert_eq!(
        assets[0].to_string(),
        "Id ~ bitcoin | Rank ~ 1 | Symbol ~ BTC | Name ~ Bitcoin | Supply ~ 19000000 | MaxSupply ~ 21000000 | MaketCapUsd ~ 1000000000000 | VolumeUsd24Hr ~ 50000000000 | PriceUsd ~ 52000.12|"
    );

    let head = server.await.unwrap();
    let head_lower = head.to_ascii_lowercase();
    assert!(head.starts_with("GET /v3/assets/ HTTP/1.1"), "{}", head);
    assert!(head_lower.contains("authorization: bearer integration-token"), "{}", head);
}

#[tokio::test]
async fn test_fetch_asset_not_found_over_http() {
    let (base_url, server) =
        serve_once("404 Not Found", r#"{"error":"nope not found"}"#, None).await;
    let client = client_for(&base_url, Duration::from_secs(5));

    let err = client.fetch_asset("nope").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref id) if id == "nope"));

    let head = server.await.unwrap();
    assert!(head.starts_with("GET /v3/assets/nope HTTP/1.1"), "{}", head);
}

#[tokio::test]
async fn test_malformed_body_over_http() {
    let (base_url, server) = serve_once("200 OK", r#"{"data":[{"id":"bitco"#, None).await;
    let client = client_for(&base_url, Duration::from_secs(5));

    let err = client.fetch_assets().await.unwrap_err();
    assert!(err.is_decode(), "unexpected error: {:?}", err);
    server.await.unwrap();
}

#[tokio::test]
async fn test_timeout_over_http() {
    let (base_url, _server) =
        serve_once("200 OK", ASSETS_BODY, Some(Duration::from_secs(3))).await;
    let client = client_for(&base_url, Duration::from_millis(200));

    let err = client.fetch_assets().await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout), "unexpected error: {:?}", err);
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr), Duration::from_secs(2));
    let err = client.fetch_asset("bitcoin").await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {:?}", err);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let zero = CoinCapClient::new(Duration::ZERO, "token").err().unwrap();
    assert!(zero.is_configuration());

    let empty = CoinCapClient::new(Duration::from_secs(1), "").err().unwrap();
    assert!(empty.is_configuration());
}
