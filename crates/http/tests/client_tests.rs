//! Integration tests for the cliniq HTTP client

use cliniq_core::session::credentials::CredentialRecord;
use cliniq_core::types::Role;
use cliniq_http::client::{
    apply_credentials, error::ClientError, PublicApiClient, TypedClientBuilder,
    SESSION_TOKEN_HEADER,
};
use cliniq_http::types::LoginRequest;
use reqwest::header;
use serde_json::json;
use wiremock::matchers::{header as header_matcher, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> CredentialRecord {
    CredentialRecord {
        access_token: "access-abc".to_string(),
        session_token: "session-xyz".to_string(),
        expires_at: None,
    }
}

#[test]
fn builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[test]
fn credential_headers_replace_instead_of_duplicating() {
    let mut headers = header::HeaderMap::new();
    apply_credentials(&mut headers, &credentials());
    apply_credentials(&mut headers, &credentials());

    assert_eq!(headers.len(), 2);
    assert_eq!(
        headers.get(header::AUTHORIZATION).unwrap(),
        "Bearer access-abc"
    );
    assert_eq!(headers.get(SESSION_TOKEN_HEADER).unwrap(), "session-xyz");
}

#[tokio::test]
async fn authorized_request_carries_both_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/me"))
        .and(header_matcher("authorization", "Bearer access-abc"))
        .and(header_matcher(SESSION_TOKEN_HEADER, "session-xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-42",
            "name": "Dr. Okafor",
            "role": "doctor"
        })))
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri())
        .unwrap()
        .authorize(credentials());

    let user = client.current_user().await.unwrap();
    assert_eq!(user.role, Role::Doctor);
    assert_eq!(user.name, "Dr. Okafor");
}

#[tokio::test]
async fn public_request_goes_out_without_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-access",
            "session_token": "fresh-session",
            "expires_at": 1_700_000_000i64,
            "user": { "id": "u-1", "name": "Ana", "role": "patient" }
        })))
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri()).unwrap();
    let response = client
        .login(LoginRequest {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.session_token, "fresh-session");
    assert_eq!(response.expires_at, Some(1_700_000_000));
    assert_eq!(response.user.role, Role::Patient);
}

#[tokio::test]
async fn unauthorized_maps_to_session_invalidation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri())
        .unwrap()
        .authorize(credentials());

    let error = client.current_user().await.unwrap_err();
    assert!(matches!(error, ClientError::AuthenticationFailed(_)));
    assert!(error.is_session_invalid());
}

#[tokio::test]
async fn forbidden_session_message_counts_as_invalidation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/me"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "Session terminated" })),
        )
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri())
        .unwrap()
        .authorize(credentials());

    let error = client.current_user().await.unwrap_err();
    assert!(matches!(error, ClientError::Forbidden(_)));
    assert!(error.is_session_invalid());
}

#[tokio::test]
async fn plain_forbidden_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/me"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "message": "Receptionists cannot view charts" })),
        )
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri())
        .unwrap()
        .authorize(credentials());

    let error = client.current_user().await.unwrap_err();
    assert!(matches!(error, ClientError::Forbidden(_)));
    assert!(!error.is_session_invalid());
}

#[tokio::test]
async fn logout_ignores_the_response_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "bye" })))
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri())
        .unwrap()
        .authorize(credentials());

    assert!(client.logout().await.is_ok());
}

#[tokio::test]
async fn session_status_round_trips_timestamps() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/session-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "last_login": "2026-08-07T08:30:00Z",
            "session_expires_at": "2026-08-07T16:30:00Z"
        })))
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri())
        .unwrap()
        .authorize(credentials());

    let status = client.session_status().await.unwrap();
    assert_eq!(
        (status.session_expires_at - status.last_login).num_hours(),
        8
    );
}
