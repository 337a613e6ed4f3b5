// tests/breach_api.rs
//! Breach range protocol tests against a local mock of the range API.

use passguard::breach::{hex_digest, BreachError};
use passguard::{BreachChecker, Config};

// SHA-1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
const PASSWORD: &str = "password";
const PREFIX: &str = "5BAA6";
const SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

fn checker_for(server: &mockito::Server) -> BreachChecker {
    BreachChecker::new(&Config::with_range_api(server.url()))
}

#[test]
fn digest_splits_into_expected_prefix_and_suffix() {
    let digest = hex_digest(PASSWORD);
    assert_eq!(digest.len(), 40);
    assert_eq!(&digest[..5], PREFIX);
    assert_eq!(&digest[5..], SUFFIX);
}

#[tokio::test]
async fn matching_suffix_reports_compromised_with_count() {
    let mut server = mockito::Server::new_async().await;
    let body = format!("0018A45C4D1DEF81644B54AB7F969B88D65:3\n{SUFFIX}:42\nFFFF000000000000000000000000000000F:1\n");
    let mock = server
        .mock("GET", format!("/range/{PREFIX}").as_str())
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let report = checker_for(&server).check(PASSWORD).await.unwrap();
    assert!(report.compromised);
    assert_eq!(report.count, 42);
    mock.assert_async().await;
}

#[tokio::test]
async fn absent_suffix_reports_clean() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/range/{PREFIX}").as_str())
        .with_status(200)
        .with_body("0018A45C4D1DEF81644B54AB7F969B88D65:3\n")
        .create_async()
        .await;

    let report = checker_for(&server).check(PASSWORD).await.unwrap();
    assert!(!report.compromised);
    assert_eq!(report.count, 0);
}

#[tokio::test]
async fn crlf_line_endings_are_tolerated() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/range/{PREFIX}").as_str())
        .with_status(200)
        .with_body(format!("AAAA000000000000000000000000000000A:7\r\n{SUFFIX}:9\r\n"))
        .create_async()
        .await;

    let report = checker_for(&server).check(PASSWORD).await.unwrap();
    assert!(report.compromised);
    assert_eq!(report.count, 9);
}

#[tokio::test]
async fn non_success_status_is_a_network_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/range/{PREFIX}").as_str())
        .with_status(503)
        .create_async()
        .await;

    let err = checker_for(&server).check(PASSWORD).await.unwrap_err();
    match err {
        BreachError::UnexpectedStatus(status) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_protocol_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/range/{PREFIX}").as_str())
        .with_status(200)
        .with_body("this is not a range response")
        .create_async()
        .await;

    let err = checker_for(&server).check(PASSWORD).await.unwrap_err();
    assert!(matches!(err, BreachError::Protocol(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_failure() {
    // Nothing listens here; the connect fails before any HTTP exchange.
    let checker = BreachChecker::new(&Config::with_range_api("http://127.0.0.1:1"));
    let err = checker.check(PASSWORD).await.unwrap_err();
    assert!(matches!(err, BreachError::Network(_)));
}
