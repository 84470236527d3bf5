//! End to end tests: rich and raw API over the HTTP transport against a mock node.

use mockito::{Matcher, Server, ServerGuard};
use pascal_rs::config::{ClientConfig, EndPoint, Scheme};
use pascal_rs::primitives::AccountNumber;
use pascal_rs::rpc::{PascalClient, RpcError, RpcErrorCode};
use std::net::TcpListener;

fn localhost_binding_permitted() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn endpoint_for(server: &ServerGuard) -> EndPoint {
    let address = server.host_with_port();
    let (host, port) = address.rsplit_once(':').expect("host:port");
    EndPoint::new(host, port.parse().expect("port"), Scheme::Http).expect("endpoint")
}

fn client_for(server: &ServerGuard) -> PascalClient {
    let config = ClientConfig::with_endpoints(vec![endpoint_for(server)]);
    PascalClient::new(&config).expect("client")
}

#[tokio::test]
async fn block_count_over_http() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/")
        .match_body(Matcher::Regex(r#""method"\s*:\s*"getblockcount""#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jsonrpc":"2.0","id":1,"result":12345}"#)
        .create_async()
        .await;

    let count = client_for(&server)
        .rich_api(&[])
        .block()
        .count()
        .await
        .expect("block count");
    assert_eq!(count, 12345);
}

#[tokio::test]
async fn account_lookup_over_http() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let body = r#"{"jsonrpc":"2.0","id":1,"result":{
        "account":77,"enc_pubkey":"CA0220000102","balance":12.5,"n_operation":3,
        "updated_b":1000,"state":"normal","name":"alice","type":0}}"#;
    let _m = server
        .mock("POST", "/")
        .match_body(Matcher::Regex(
            r#""method"\s*:\s*"getaccount".*"params"\s*:\s*\{\s*"account"\s*:\s*77\s*\}"#
                .to_string(),
        ))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let account = client_for(&server)
        .rich_api(&[])
        .account()
        .find(AccountNumber::new(77))
        .await
        .expect("account");
    assert_eq!(account.number.to_string(), "77-44");
    assert_eq!(account.balance.to_pascal(), "12.5000");
    assert_eq!(account.name, "alice");
}

#[tokio::test]
async fn node_error_over_http() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":1002,"message":"Invalid account"}}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .raw_api(&[])
        .get_account(999_999)
        .await
        .expect_err("node error");
    assert_eq!(err.error_code(), Some(RpcErrorCode::InvalidAccount));
    assert!(err.is_known_error());
}

#[tokio::test]
async fn non_json_body_is_invalid_response() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .raw_api(&[])
        .get_block_count()
        .await
        .expect_err("invalid body");
    assert!(matches!(err, RpcError::InvalidResponse { .. }));
}

#[tokio::test]
async fn per_call_override_reaches_the_other_node() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut primary = Server::new_async().await;
    let mut secondary = Server::new_async().await;
    let primary_mock = primary
        .mock("POST", "/")
        .with_body(r#"{"jsonrpc":"2.0","id":1,"result":1}"#)
        .expect(0)
        .create_async()
        .await;
    let secondary_mock = secondary
        .mock("POST", "/")
        .with_body(r#"{"jsonrpc":"2.0","id":1,"result":2}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&primary);
    let count = client
        .raw_api(&[endpoint_for(&secondary)])
        .get_block_count()
        .await
        .expect("block count");
    assert_eq!(count, 2);
    primary_mock.assert_async().await;
    secondary_mock.assert_async().await;
}

#[tokio::test]
async fn client_from_config_file() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/")
        .with_body(r#"{"jsonrpc":"2.0","id":1,"result":true}"#)
        .create_async()
        .await;

    let endpoint = endpoint_for(&server);
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    std::fs::write(
        &path,
        format!(
            "request_timeout_ms = 2000\n\n[[endpoints]]\nhost = \"{}\"\nport = {}\n",
            endpoint.host(),
            endpoint.port()
        ),
    )
    .expect("write config");

    let client = PascalClient::from_config_file(&path).expect("client");
    assert!(client.rich_api(&[]).node().start().await.expect("startnode"));
}
