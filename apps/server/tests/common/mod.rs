//! Shared helpers for the server integration tests.
//!
//! `FakeUpstream` is a local axum server that stands in for DataLab,
//! SearchAd and OpenAI at once. Point the providers at it through the
//! endpoint override variables returned by [`FakeUpstream::env`].

#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use keywordlab_keyword_data::provider::signature::sign;
use keywordlab_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const CLIENT_ID: &str = "datalab-id";
pub const CLIENT_SECRET: &str = "datalab-secret";
pub const CUSTOMER_ID: &str = "1234567";
pub const ACCESS_LICENSE: &str = "access-license";
pub const SECRET_KEY: &str = "AQAAAABsearchadsecret==";
pub const OPENAI_KEY: &str = "sk-test";

#[derive(Default)]
pub struct UpstreamState {
    pub failing: bool,
    /// When set, chat completions answer 500 after this delay.
    pub stalling_suggestions: Option<Duration>,
    pub datalab_calls: AtomicUsize,
    pub searchad_calls: AtomicUsize,
    pub openai_calls: AtomicUsize,
    pub rejected_signatures: AtomicUsize,
    pub searchad_hints: Mutex<Vec<String>>,
    pub openai_counts: Mutex<Vec<usize>>,
}

pub struct FakeUpstream {
    pub addr: SocketAddr,
    pub state: Arc<UpstreamState>,
}

impl FakeUpstream {
    pub async fn start() -> Self {
        Self::spawn(UpstreamState::default()).await
    }

    /// Every endpoint answers 500.
    pub async fn start_failing() -> Self {
        Self::spawn(UpstreamState {
            failing: true,
            ..Default::default()
        })
        .await
    }

    /// Chat completions stall for `delay` and then fail; everything else
    /// answers normally.
    pub async fn start_with_stalling_suggestions(delay: Duration) -> Self {
        Self::spawn(UpstreamState {
            stalling_suggestions: Some(delay),
            ..Default::default()
        })
        .await
    }

    async fn spawn(state: UpstreamState) -> Self {
        let state = Arc::new(state);
        let router = Router::new()
            .route("/v1/datalab/search", post(datalab))
            .route("/keywordstool", get(keywordstool))
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake upstream");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("fake upstream");
        });

        Self { addr, state }
    }

    /// Credentials for every provider plus endpoint overrides.
    pub fn env(&self) -> Vec<(String, String)> {
        vec![
            ("NAVER_CLIENT_ID", CLIENT_ID.to_string()),
            ("NAVER_CLIENT_SECRET", CLIENT_SECRET.to_string()),
            ("NAVER_SEARCHAD_CUSTOMER_ID", CUSTOMER_ID.to_string()),
            ("NAVER_SEARCHAD_ACCESS_LICENSE", ACCESS_LICENSE.to_string()),
            ("NAVER_SEARCHAD_SECRET_KEY", SECRET_KEY.to_string()),
            ("OPENAI_API_KEY", OPENAI_KEY.to_string()),
            (
                "NAVER_DATALAB_URL",
                format!("http://{}/v1/datalab/search", self.addr),
            ),
            ("NAVER_SEARCHAD_BASE_URL", format!("http://{}", self.addr)),
            ("OPENAI_BASE_URL", format!("http://{}/v1", self.addr)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    pub fn searchad_hints(&self) -> Vec<String> {
        self.state.searchad_hints.lock().unwrap().clone()
    }

    pub fn openai_counts(&self) -> Vec<usize> {
        self.state.openai_counts.lock().unwrap().clone()
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
}

async fn datalab(
    State(state): State<Arc<UpstreamState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.datalab_calls.fetch_add(1, Ordering::SeqCst);
    if state.failing {
        return internal_error();
    }
    if header(&headers, "X-Naver-Client-Id") != CLIENT_ID
        || header(&headers, "X-Naver-Client-Secret") != CLIENT_SECRET
    {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let ratios = match body["device"].as_str() {
        Some("pc") => [10.0, 20.0, 30.0],
        Some("mo") => [40.0, 50.0, 60.0],
        _ => return StatusCode::BAD_REQUEST.into_response(),
    };
    let data: Vec<Value> = ratios
        .iter()
        .enumerate()
        .map(|(i, ratio)| json!({ "period": format!("2026-09-{:02}", i * 7 + 1), "ratio": ratio }))
        .collect();

    Json(json!({
        "startDate": body["startDate"],
        "endDate": body["endDate"],
        "timeUnit": "week",
        "results": [{
            "title": body["keywordGroups"][0]["groupName"],
            "keywords": body["keywordGroups"][0]["keywords"],
            "data": data
        }]
    }))
    .into_response()
}

async fn keywordstool(
    State(state): State<Arc<UpstreamState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.searchad_calls.fetch_add(1, Ordering::SeqCst);
    let hint = params.get("hintKeywords").cloned().unwrap_or_default();
    state.searchad_hints.lock().unwrap().push(hint.clone());
    if state.failing {
        return internal_error();
    }

    let expected = sign(
        header(&headers, "X-Timestamp"),
        "GET",
        "/keywordstool",
        SECRET_KEY.as_bytes(),
    );
    if header(&headers, "X-Signature") != expected
        || header(&headers, "X-API-KEY") != ACCESS_LICENSE
        || header(&headers, "X-Customer") != CUSTOMER_ID
        || params.get("showDetail").map(String::as_str) != Some("1")
    {
        state.rejected_signatures.fetch_add(1, Ordering::SeqCst);
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "code": 1002, "title": "Invalid signature" })),
        )
            .into_response();
    }

    match hint.as_str() {
        "스티커" => Json(json!({
            "keywordList": [
                {
                    "relKeyword": "스티커인쇄",
                    "monthlyPcQcCnt": 880,
                    "monthlyMobileQcCnt": 5100
                },
                {
                    "relKeyword": "스티커",
                    "monthlyPcQcCnt": "< 10",
                    "monthlyMobileQcCnt": 2400
                }
            ]
        }))
        .into_response(),
        "키워드" => Json(json!({
            "keywordList": [{ "relKeyword": "키워드", "monthlyPcQcCnt": 15 }]
        }))
        .into_response(),
        "plaintext" => "not json at all".into_response(),
        _ => Json(json!({ "keywordList": [] })).into_response(),
    }
}

/// Reads the requested list size out of the user prompt.
fn requested_count(body: &Value) -> usize {
    body["messages"][1]["content"]
        .as_str()
        .and_then(|content| content.split("연관키워드 ").nth(1))
        .and_then(|rest| rest.split('개').next())
        .and_then(|n| n.trim().parse().ok())
        .unwrap_or(0)
}

async fn chat_completions(
    State(state): State<Arc<UpstreamState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.openai_calls.fetch_add(1, Ordering::SeqCst);
    let count = requested_count(&body);
    state.openai_counts.lock().unwrap().push(count);
    if let Some(delay) = state.stalling_suggestions {
        tokio::time::sleep(delay).await;
        return internal_error();
    }
    if state.failing {
        return internal_error();
    }
    if header(&headers, "Authorization") != format!("Bearer {}", OPENAI_KEY) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let related: Vec<String> = (1..=count).map(|i| format!("연관{}", i)).collect();
    let popular: Vec<String> = (1..=count).map(|i| format!("인기{}", i)).collect();
    let content = format!(
        "추천 결과입니다.\n```json\n{}\n```",
        json!({ "related": related, "popular": popular })
    );

    Json(json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    }))
    .into_response()
}

/// Build the app router from an explicit variable set.
pub async fn app_with(vars: Vec<(String, String)>) -> Router {
    let vars: HashMap<String, String> = vars.into_iter().collect();
    let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

pub async fn unconfigured_app() -> Router {
    app_with(Vec::new()).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

pub fn post_keyword(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/keyword")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
