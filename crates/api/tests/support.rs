//! Shared harness for router tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use ignitecall_domain::{AuthConfig, Config};
use ignitecall_lib::{router, AppContext};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CALENDAR: &str = "https://www.googleapis.com/auth/calendar";

pub struct TestApp {
    pub ctx: Arc<AppContext>,
    pub google: MockServer,
    app: Router,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let google = MockServer::start().await;
        let temp_dir = TempDir::new().expect("temp dir");

        let mut config = Config::new(AuthConfig::google("client-id", "client-secret"));
        config.auth.token_endpoint = Some(format!("{}/token", google.uri()));
        config.database.path = temp_dir.path().join("app.db").display().to_string();
        config.database.pool_size = 2;

        let ctx = Arc::new(AppContext::new(config).expect("context"));
        let app = router(Arc::clone(&ctx));
        Self { ctx, google, app, _temp_dir: temp_dir }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::get(uri);
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Register a user and return the `Cookie` header value for its id cookie.
    pub async fn register(&self, username: &str) -> String {
        let response =
            self.post_json("/api/users", json!({ "username": username, "name": "Maria Souza" })).await;
        assert_eq!(response.status(), 201);
        let id = set_cookie_value(&response, "@ignitecall:userId").expect("user id cookie");
        format!("@ignitecall:userId={id}")
    }

    /// Start a handshake from a fresh browser.
    pub async fn start_sign_in(&self) -> Handshake {
        let response = self.get("/api/auth/signin/google", None).await;
        assert_eq!(response.status(), 303);
        let state_cookie = set_cookie_value(&response, "ignitecall.oauth-state").expect("state cookie");
        let location = location(&response);
        let url = url::Url::parse(&location).expect("absolute authorization url");
        let state = url
            .query_pairs()
            .find(|(key, _)| key == "state")
            .map(|(_, value)| value.into_owned())
            .expect("state parameter");
        Handshake { state, cookie: format!("ignitecall.oauth-state={state_cookie}") }
    }

    /// Answer the next code exchange with `scope` for Google account `subject`.
    pub async fn mock_token(&self, scope: &str, subject: &str) {
        let claims = json!({ "sub": subject, "email": "maria@example.com", "name": "Maria Souza" });
        let id_token = format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256"}"#),
            URL_SAFE_NO_PAD.encode(claims.to_string())
        );
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "ya29.access",
                "id_token": id_token,
                "token_type": "Bearer",
                "expires_in": 3599,
                "scope": scope,
            })))
            .up_to_n_times(1)
            .mount(&self.google)
            .await;
    }
}

/// A started handshake: the state Google echoes back and the browser's state cookie.
pub struct Handshake {
    pub state: String,
    pub cookie: String,
}

impl Handshake {
    pub fn callback_uri(&self, code: &str) -> String {
        format!("/api/auth/callback/google?code={code}&state={}", self.state)
    }

    /// `Cookie` header carrying the state cookie plus `other`, if any.
    pub fn cookies(&self, other: Option<&str>) -> String {
        match other {
            Some(other) => format!("{}; {other}", self.cookie),
            None => self.cookie.clone(),
        }
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
        .to_string()
}

pub fn set_cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|header| header.split(';').next())
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
