//! Test doubles: an in-process administrative API and a scripted operator

use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use reqwest::{Client, ClientBuilder};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::prompt::Prompter;

/// Cookie handed out by the mock on a successful login
pub const SESSION_COOKIE: &str = "id=admin-session";

/// How the mock API answers
#[derive(Debug, Clone)]
pub struct MockBehavior {
    pub login_status: StatusCode,
    pub create_status: StatusCode,
    pub logout_status: StatusCode,
    /// Raw body returned by a successful create instead of JSON
    pub create_body: Option<&'static str>,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            login_status: StatusCode::OK,
            create_status: StatusCode::OK,
            logout_status: StatusCode::OK,
            create_body: None,
        }
    }
}

/// One request seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub body: Option<Value>,
    pub cookie: Option<String>,
}

#[derive(Debug)]
struct MockState {
    behavior: MockBehavior,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<MockState>>;

/// Administrative API stand-in listening on an ephemeral local port
pub struct MockApi {
    state: Shared,
    pub base_url: String,
}

impl MockApi {
    pub async fn start() -> Self {
        Self::start_with(MockBehavior::default()).await
    }

    pub async fn start_with(behavior: MockBehavior) -> Self {
        let state = Arc::new(Mutex::new(MockState {
            behavior,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/api/login", post(login))
            .route("/api/user", post(create_user))
            .route("/api/logout", post(logout))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            base_url: format!("http://{addr}/api"),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    /// Body of the first request made to `path`
    pub fn body_of(&self, path: &str) -> Option<Value> {
        self.requests()
            .into_iter()
            .find(|r| r.path == path)
            .and_then(|r| r.body)
    }
}

/// Client builder for talking to the mock; loopback never goes through a proxy
pub fn loopback_client() -> ClientBuilder {
    Client::builder().no_proxy()
}

/// Base URL of a port nobody listens on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

fn record(state: &Shared, path: &str, headers: &HeaderMap, body: &str) -> MockBehavior {
    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        path: path.to_string(),
        body: serde_json::from_str(body).ok(),
        cookie: headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    });
    state.behavior.clone()
}

fn error_body(status: StatusCode) -> Response {
    let reason = status.canonical_reason().unwrap_or("Error");
    (status, format!(r#"{{"error":"{reason}"}}"#)).into_response()
}

async fn login(State(state): State<Shared>, headers: HeaderMap, body: String) -> Response {
    let behavior = record(&state, "/api/login", &headers, &body);
    if !behavior.login_status.is_success() {
        return error_body(behavior.login_status);
    }

    (
        StatusCode::OK,
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/"))],
        Json(json!({"message": "Login successful"})),
    )
        .into_response()
}

async fn create_user(State(state): State<Shared>, headers: HeaderMap, body: String) -> Response {
    let behavior = record(&state, "/api/user", &headers, &body);
    let authed = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|cookie| cookie.contains(SESSION_COOKIE));
    if !authed {
        return error_body(StatusCode::UNAUTHORIZED);
    }
    if !behavior.create_status.is_success() {
        return error_body(behavior.create_status);
    }
    if let Some(raw) = behavior.create_body {
        return (StatusCode::OK, raw).into_response();
    }

    let request: Value = serde_json::from_str(&body).unwrap_or_default();
    Json(json!({
        "id": 7,
        "username": request["username"],
        "role": request["role"],
        "name": request["name"],
        "avatar": null,
    }))
    .into_response()
}

async fn logout(State(state): State<Shared>, headers: HeaderMap, body: String) -> Response {
    let behavior = record(&state, "/api/logout", &headers, &body);
    if !behavior.logout_status.is_success() {
        return error_body(behavior.logout_status);
    }
    StatusCode::OK.into_response()
}

/// Operator that answers prompts from a fixed script
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Every prompt shown, with whether it was a secret prompt
    pub asked: Vec<(String, bool)>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }

    fn answer(&mut self, prompt: &str, secret: bool) -> io::Result<String> {
        self.asked.push((prompt.to_string(), secret));
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no scripted answer for {prompt:?}"),
            )
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> io::Result<String> {
        self.answer(prompt, false)
    }

    fn password(&mut self, prompt: &str) -> io::Result<String> {
        self.answer(prompt, true)
    }
}
