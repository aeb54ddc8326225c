//! Integration tests using wiremock to simulate the reselling portal API.

use exbil_cloud::metadata::RequestMetadata;
use exbil_cloud::{Client, Error, ErrorKind, ReqwestTransport};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Invoice {
    id: u32,
    total: f64,
}

fn client_for(mock_server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(format!("{}/api/", mock_server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_successful_get_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/domains/example.com/dns"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1, "type": "A", "content": "192.0.2.1"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let records = client.domain().dns().get("example.com").await.unwrap();

    assert_eq!(records, json!([{"id": 1, "type": "A", "content": "192.0.2.1"}]));
}

#[tokio::test]
async fn test_power_start_posts_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/products/rootserver/42/power/start"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"task_id": 7})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let data = client.root_server().power().start(42).await.unwrap();
    assert_eq!(data["task_id"], json!(7));
}

#[tokio::test]
async fn test_user_agent_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounting/usage"))
        .and(header("user-agent", "ExbilCloudApiClient/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    client.accounting().usage().await.unwrap();
}

#[tokio::test]
async fn test_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/vpn-check"))
        .and(header("x-reseller-id", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .base_url(format!("{}/api/", mock_server.uri()))
        .default_header("X-Reseller-Id", "1234")
        .unwrap()
        .build()
        .unwrap();

    client.get("v1/vpn-check", &[]).await.unwrap();
}

#[tokio::test]
async fn test_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/products/vpn/accounts/5/config/openvpn"))
        .and(query_param("server_id", "2"))
        .and(query_param("port_id", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"config": "..."})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let data = client.vpn().config().openvpn(5, 2, 9).await.unwrap();
    assert_eq!(data["config"], json!("..."));
}

#[tokio::test]
async fn test_all_http_methods() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/domains/handles/H-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "H-1"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/domains/handles"))
        .and(body_json(json!({"type": "person"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "H-2"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/domains/handles/H-1"))
        .and(body_json(json!({"city": "Berlin"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "H-1"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/domains/handles/H-1"))
        .respond_with(ResponseTemplate::new(204).set_body_string(""))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let handle = client.domain().handle();

    assert_eq!(handle.get("H-1").await.unwrap(), json!({"id": "H-1"}));

    let mut data = serde_json::Map::new();
    data.insert("type".to_string(), json!("person"));
    assert_eq!(handle.create(&data).await.unwrap(), json!({"id": "H-2"}));

    let mut data = serde_json::Map::new();
    data.insert("city".to_string(), json!("Berlin"));
    assert_eq!(handle.update("H-1", &data).await.unwrap(), json!({"id": "H-1"}));

    // 204 No Content decodes to null
    assert_eq!(handle.delete("H-1").await.unwrap(), serde_json::Value::Null);
}

#[tokio::test]
async fn test_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/domains/handles"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Invalid handle",
            "errors": {"email": ["required"]}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let result = client.domain().handle().create(&serde_json::Map::new()).await;

    match result {
        Err(Error::Api(e)) => {
            assert_eq!(e.kind(), ErrorKind::Validation);
            assert_eq!(e.message(), "Invalid handle");
            assert_eq!(e.status().unwrap().as_u16(), 422);
            assert_eq!(
                serde_json::Value::Object(e.payload().clone()),
                json!({"errors": {"email": ["required"]}})
            );
            assert_eq!(
                e.validation_errors().get("email"),
                Some(&vec!["required".to_string()])
            );
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_kinds() {
    let mock_server = MockServer::start().await;

    for (status, route) in [(401u16, "auth"), (403, "forbidden"), (404, "missing"), (502, "gateway")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/{}", route)))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({"message": route, "code": status})),
            )
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);

    for (route, kind) in [
        ("auth", ErrorKind::Authentication),
        ("forbidden", ErrorKind::Forbidden),
        ("missing", ErrorKind::NotFound),
        ("gateway", ErrorKind::Api),
    ] {
        let err = client.get(&format!("v1/{}", route), &[]).await.unwrap_err();
        let api = err.as_api().expect("api error");

        assert_eq!(api.kind(), kind);
        assert_eq!(api.message(), route);
        assert_eq!(api.payload().get("message"), Some(&json!(route)));
        assert!(err.raw_response().unwrap().contains(route));
    }
}

#[tokio::test]
async fn test_error_without_message_uses_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/domains/example.com"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.domain().get("example.com").await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
    assert_eq!(err.as_api().unwrap().message(), "An error occurred");
}

#[tokio::test]
async fn test_invalid_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounting/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let result = client.accounting().invoices().await;

    match result {
        Err(Error::InvalidJson {
            raw_response,
            serde_error,
            status,
        }) => {
            assert_eq!(status.as_u16(), 200);
            assert_eq!(raw_response, "invalid json");
            assert!(serde_error.contains("expected"));
        }
        _ => panic!("Expected InvalidJson, got {:?}", result),
    }
}

#[tokio::test]
async fn test_invalid_json_on_error_status_is_not_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/domains"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<h1>Service Unavailable</h1>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.domain().list().await.unwrap_err();
    assert!(matches!(err, Error::InvalidJson { .. }));
    assert_eq!(err.kind(), None);
    assert_eq!(err.status().unwrap().as_u16(), 503);
}

#[tokio::test]
async fn test_timeout_becomes_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .base_url(format!("{}/api/", mock_server.uri()))
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.get("v1/slow", &[]).await.unwrap_err();
    let api = err.as_api().expect("api error");

    assert_eq!(api.kind(), ErrorKind::Api);
    assert!(api.status().is_none());
    assert!(api.response().is_none());
    assert!(api.message().starts_with("HTTP request failed: "));

    let source = std::error::Error::source(api).expect("source is chained");
    let reqwest_error = source
        .downcast_ref::<reqwest::Error>()
        .expect("source is the reqwest error");
    assert!(reqwest_error.is_timeout());
}

#[tokio::test]
async fn test_connection_refused_becomes_transport_error() {
    // Grab a free port and release it so nothing is listening there
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = Client::builder()
        .api_key("test-key")
        .base_url(format!("http://127.0.0.1:{}/api/", port))
        .build()
        .unwrap();

    let err = client.vpn().servers().await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Api));
    assert!(err.status().is_none());
    assert!(std::error::Error::source(err.as_api().unwrap()).is_some());
}

#[tokio::test]
async fn test_response_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounting/invoices/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 7, "total": 19.99}))
                .insert_header("x-custom-header", "custom-value")
                .set_delay(Duration::from_millis(20)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let response = client
        .call(RequestMetadata::new(http::Method::GET, "/v1/accounting/invoices/7"))
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert!(response.latency >= Duration::from_millis(20));
    assert!(response.raw_body.contains("19.99"));
    assert_eq!(response.header("x-custom-header"), Some("custom-value"));

    let invoice: Invoice = response.json().unwrap();
    assert_eq!(invoice, Invoice { id: 7, total: 19.99 });
}

#[tokio::test]
async fn test_facades_share_one_client_across_tasks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/products/vpn/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let tasks: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.vpn().servers().await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), json!([]));
    }
    assert!(std::ptr::eq(client.vpn(), client.clone().vpn()));
}

#[tokio::test]
async fn test_prebuilt_reqwest_client_as_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounting/credit"))
        .and(header("user-agent", "reseller-panel/2.0"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"credit": 42.5})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let http_client = reqwest::Client::builder()
        .user_agent("reseller-panel/2.0")
        .build()
        .unwrap();

    let client = Client::builder()
        .api_key("test-key")
        .base_url(format!("{}/api/", mock_server.uri()))
        .transport(ReqwestTransport::from_client(http_client))
        .build()
        .unwrap();

    let data = client.get("v1/accounting/credit", &[]).await.unwrap();

    assert_eq!(data, json!({"credit": 42.5}));
}
