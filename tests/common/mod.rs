// tests/common/mod.rs
// Shared helpers: a local axum server standing in for the Tavily endpoint.
#![allow(dead_code)]

use std::time::Duration;

use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use news_monitor::config::search::SearchConfig;

pub const TEST_KEY: &str = "test-key";

/// Serve `router` on an ephemeral localhost port; returns `http://127.0.0.1:PORT`.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Config pointing at a fake upstream under `base`, no inter-category delay.
pub fn cfg_for(base: &str, key: Option<&str>) -> SearchConfig {
    SearchConfig {
        api_key: key.map(str::to_string),
        endpoint: format!("{base}/search"),
        category_delay: Duration::ZERO,
        http_timeout: Duration::from_secs(5),
        ..SearchConfig::default()
    }
}

/// Fake Tavily: validates auth + body shape, echoes the query into the first hit.
///
/// Upstream order is foreign, domestic, foreign (malformed url), domestic.
pub fn fake_tavily_ok() -> Router {
    async fn search(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        let auth_ok = bearer.as_deref() == Some("Bearer test-key") && body["api_key"] == TEST_KEY;
        let domains_ok = body["include_domains"]
            .as_array()
            .is_some_and(|a| a.iter().any(|d| d == "xinhuanet.com"));
        let shape_ok = body["max_results"].as_u64().is_some() && body["search_depth"] == "basic";
        if !(auth_ok && domains_ok && shape_ok) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "bad request" })),
            );
        }

        let query = body["query"].as_str().unwrap_or_default().to_string();
        (
            StatusCode::OK,
            Json(json!({
                "results": [
                    { "title": "Reuters: 央行降息", "url": "https://www.reuters.com/a", "content": query, "score": 0.9 },
                    { "title": "突发：新华社快讯", "url": "https://www.xinhuanet.com/b", "content": "<p>正文</p>" },
                    { "title": "", "url": "not a url" },
                    { "title": "澎湃 伊朗 局势", "url": "https://www.thepaper.cn/c" }
                ]
            })),
        )
    }
    Router::new().route("/search", post(search))
}

/// Fake Tavily that always answers with `status` and a plain-text body.
pub fn fake_tavily_status(status: StatusCode) -> Router {
    Router::new().route(
        "/search",
        post(move || async move { (status, "slow down") }),
    )
}
