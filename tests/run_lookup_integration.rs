//! End-to-end tests for the orchestrated lookup run.
//!
//! These tests verify the full sequence: credential validation, the two
//! sequential API calls, the abort-on-first-failure behavior, and the
//! rendered summary.

use visitor_profile::{exit_code_for, run_lookup, Config, ErrorKind};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IP_BODY: &str = r#"{
    "ip": "8.8.8.8",
    "hostname": "dns.google",
    "city": "Mountain View",
    "region": "California",
    "country": "US",
    "loc": "37.4056,-122.0775",
    "org": "AS15169 Google LLC",
    "postal": "94043",
    "timezone": "America/Los_Angeles"
}"#;

const USER_AGENT_BODY: &str = r#"{
    "parse": {
        "user_agent": "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_2) AppleWebKit/601.3.9 (KHTML, like Gecko) Version/9.0.2 Safari/601.3.9",
        "software_name": "Safari",
        "software_version": "9.0.2",
        "operating_system_name": "Mac OS X",
        "operating_system_version": "10.11.2"
    },
    "result": {"code": "success"}
}"#;

/// Builds a Config pointing both endpoints at the mock server.
fn config_for(server: &MockServer) -> Config {
    Config {
        ip_api_key: "ip-token".to_string(),
        user_agent_api_key: "ua-key".to_string(),
        ip_api_base: server.uri(),
        user_agent_api_url: format!("{}/api/v2/user_agent_parse", server.uri()),
        timeout_seconds: 5,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_end_to_end_summary_ordering() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/8.8.8.8/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(IP_BODY))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/user_agent_parse"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USER_AGENT_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let report = run_lookup(config_for(&server)).await.expect("run should succeed");
    let rendered = report.to_string();

    let city = rendered
        .find("City: Mountain View")
        .expect("city line missing");
    let software = rendered
        .find("Software Name: Safari")
        .expect("software line missing");
    assert!(city < software, "City line must precede Software Name line");
    assert_eq!(rendered.lines().count(), 14);
}

/// An empty credential aborts before any HTTP call and maps to exit code 1.
#[tokio::test]
async fn test_empty_credential_performs_no_http_calls() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.ip_api_key = String::new();

    let err = run_lookup(config).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(exit_code_for(&err), 1);
    // The expect(0) on the catch-all mock is verified when `server` drops.
}

/// A failed IP lookup aborts the run before the user-agent call is made.
#[tokio::test]
async fn test_ip_failure_aborts_before_user_agent_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/8.8.8.8/json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/user_agent_parse"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USER_AGENT_BODY))
        .expect(0)
        .mount(&server)
        .await;

    let err = run_lookup(config_for(&server)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(exit_code_for(&err), 2);
}

/// A user-agent decode failure after a successful IP lookup produces no
/// report at all: failure means no partial summary.
#[tokio::test]
async fn test_user_agent_failure_yields_no_partial_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/8.8.8.8/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(IP_BODY))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/user_agent_parse"))
        .respond_with(ResponseTemplate::new(200).set_body_string("truncated{"))
        .expect(1)
        .mount(&server)
        .await;

    let err = run_lookup(config_for(&server)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(exit_code_for(&err), 2);
}
