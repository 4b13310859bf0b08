//! Integration tests for auth module
//!
//! Drives the authorization-code + PKCE flow against a mock token endpoint.

#![cfg(feature = "platform")]

use std::collections::HashMap;

use ignitecall_common::auth::{
    generate_code_challenge, OAuthClient, OAuthClientError, OAuthClientTrait, OAuthConfig,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn config_for(server: &MockServer) -> OAuthConfig {
    OAuthConfig::new(
        format!("{}/o/oauth2/v2/auth", server.uri()),
        format!("{}/token", server.uri()),
        "client-id".to_string(),
        "http://localhost:3333/api/auth/callback/google".to_string(),
        vec!["openid".to_string(), "https://www.googleapis.com/auth/calendar".to_string()],
    )
    .with_client_secret("client-secret")
    .with_authorize_param("access_type", "offline")
    .with_authorize_param("prompt", "consent")
}

fn query_params(url: &str) -> HashMap<String, String> {
    let (_, query) = url.split_once('?').unwrap();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), urlencoding::decode(v).unwrap().into_owned()))
        .collect()
}

fn form_params(request: &Request) -> HashMap<String, String> {
    let body = String::from_utf8(request.body.clone()).unwrap();
    body.split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| {
            let v = v.replace('+', " ");
            (k.to_string(), urlencoding::decode(&v).unwrap().into_owned())
        })
        .collect()
}

/// Full handshake: the verifier posted to the token endpoint must hash to
/// the challenge sent on the authorization URL, and the granted scopes come
/// back on the token set.
#[tokio::test]
async fn test_code_exchange_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code"))
        .and(body_string_contains("client_secret=client-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "ya29.token",
            "refresh_token": "1//refresh",
            "id_token": "header.payload.sig",
            "token_type": "Bearer",
            "expires_in": 3599,
            "scope": "openid https://www.googleapis.com/auth/calendar"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OAuthClient::new(config_for(&server)).unwrap();
    let (url, state) = client.generate_authorization_url();
    let authorize = query_params(&url);
    assert_eq!(authorize["prompt"], "consent");
    assert_eq!(authorize["redirect_uri"], client.redirect_uri());

    let tokens = client.exchange_code_for_tokens("auth-code", &state).await.unwrap();

    assert_eq!(tokens.access_token, "ya29.token");
    assert_eq!(tokens.refresh_token.as_deref(), Some("1//refresh"));
    let scopes: Vec<&str> = tokens.granted_scopes().collect();
    assert!(scopes.contains(&"https://www.googleapis.com/auth/calendar"));

    let requests = server.received_requests().await.unwrap();
    let form = form_params(&requests[0]);
    assert_eq!(generate_code_challenge(&form["code_verifier"]), authorize["code_challenge"]);
    assert_eq!(client.pending_count(), 0);
}

/// A state can only be redeemed once.
#[tokio::test]
async fn test_state_is_single_use() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "token",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;

    let client = OAuthClient::new(config_for(&server)).unwrap();
    let (_, state) = client.generate_authorization_url();

    assert!(client.exchange_code_for_tokens("code", &state).await.is_ok());
    let replay = client.exchange_code_for_tokens("code", &state).await;
    assert!(matches!(replay, Err(OAuthClientError::StateMismatch { .. })));
}

/// Provider errors surface as `OAuthError` with the RFC 6749 body.
#[tokio::test]
async fn test_token_endpoint_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Bad Request"
        })))
        .mount(&server)
        .await;

    let client = OAuthClient::new(config_for(&server)).unwrap();
    let (_, state) = client.generate_authorization_url();

    match client.exchange_code_for_tokens("stale", &state).await {
        Err(OAuthClientError::OAuthError(error)) => assert_eq!(error.error, "invalid_grant"),
        other => panic!("expected OAuthError, got {other:?}"),
    }
}

/// The trait object dispatches to the concrete client.
#[tokio::test]
async fn test_trait_object_usage() {
    let server = MockServer::start().await;
    let client: Box<dyn OAuthClientTrait> =
        Box::new(OAuthClient::new(config_for(&server)).unwrap());

    let (url, _) = client.generate_authorization_url();
    assert!(url.starts_with(&server.uri()));

    let result = client.exchange_code_for_tokens("code", "never-issued").await;
    assert!(matches!(result, Err(OAuthClientError::StateMismatch { .. })));
}
