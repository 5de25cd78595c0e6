// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets on our side.
// The router is exercised via tower::ServiceExt::oneshot; the upstream search
// provider is a local fake from `common`.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use news_monitor::config::search::SearchConfig;
use news_monitor::news::keywords::KeywordTables;
use news_monitor::{api, AppState, NewsCategory, NewsItem, NewsSource};

const BODY_LIMIT: usize = 1024 * 1024;

fn state_for(cfg: &SearchConfig) -> AppState {
    AppState::from_config(cfg, Arc::new(KeywordTables::default_seed())).expect("app state")
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Json) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET");
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let v = serde_json::from_slice(&bytes).unwrap_or(Json::Null);
    (status, headers, v)
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let app = api::router(state_for(&SearchConfig::default()));
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    assert_eq!(String::from_utf8(bytes.to_vec()).unwrap().trim(), "OK");
}

#[tokio::test]
async fn category_route_without_key_is_500_with_json_error() {
    let app = api::router(state_for(&SearchConfig::default()));
    let (status, _, v) = get(app, "/api/news?category=tech").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(v["error"], "Tavily API key not configured");
}

#[tokio::test]
async fn category_route_returns_domestic_first_with_cache_header() {
    let base = common::spawn(common::fake_tavily_ok()).await;
    let app = api::router(state_for(&common::cfg_for(&base, Some(common::TEST_KEY))));

    let (status, headers, v) = get(app, "/api/news?category=finance").await;
    assert_eq!(status, StatusCode::OK, "body: {v}");
    assert_eq!(
        headers.get(header::CACHE_CONTROL).unwrap().to_str().unwrap(),
        "max-age=60"
    );
    assert_eq!(v["category"], "finance");

    let urls: Vec<&str> = v["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|r| r["url"].as_str().unwrap())
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://www.xinhuanet.com/b",
            "https://www.thepaper.cn/c",
            "https://www.reuters.com/a",
            "not a url",
        ]
    );
    // The query sent upstream is the finance one (echoed by the fake).
    assert_eq!(v["results"][2]["content"], NewsCategory::Finance.query());
}

#[tokio::test]
async fn unknown_category_falls_back_to_politics() {
    let base = common::spawn(common::fake_tavily_ok()).await;
    let app = api::router(state_for(&common::cfg_for(&base, Some(common::TEST_KEY))));

    let (status, _, v) = get(app.clone(), "/api/news?category=sports").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["category"], "politics");

    let (_, _, v) = get(app, "/api/news").await;
    assert_eq!(v["category"], "politics");
}

#[tokio::test]
async fn upstream_status_is_passed_through() {
    let base = common::spawn(common::fake_tavily_status(StatusCode::TOO_MANY_REQUESTS)).await;
    let app = api::router(state_for(&common::cfg_for(&base, Some(common::TEST_KEY))));

    let (status, _, v) = get(app, "/api/news?category=ai").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(v["error"], "tavily_error");
    assert_eq!(v["statusText"], "Too Many Requests");
    assert_eq!(v["body"], "slow down");
}

#[tokio::test]
async fn unreachable_upstream_is_internal_error() {
    let cfg = common::cfg_for("http://127.0.0.1:9", Some(common::TEST_KEY));
    let app = api::router(state_for(&cfg));
    let (status, _, v) = get(app, "/api/news?category=gov").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(v["error"], "internal_error");
    assert!(v["message"].as_str().is_some());
}

struct OneItemSource;

#[async_trait::async_trait]
impl NewsSource for OneItemSource {
    async fn fetch_category(&self, category: NewsCategory) -> Vec<NewsItem> {
        if category == NewsCategory::Gov {
            return Vec::new();
        }
        vec![NewsItem {
            id: format!("tav-{category}-0"),
            title: "t".into(),
            link: "https://qq.com/x".into(),
            timestamp: 0,
            description: None,
            content: None,
            source: "Tavily".into(),
            category,
            is_alert: Some(false),
            alert_keyword: None,
            region: None,
            topics: Some(vec![]),
        }]
    }

    fn name(&self) -> &'static str {
        "one-item"
    }
}

#[tokio::test]
async fn all_route_returns_every_category() {
    let mut state = state_for(&SearchConfig::default());
    state.news = Arc::new(OneItemSource) as Arc<dyn NewsSource>;
    state.category_delay = Duration::ZERO;

    let (status, _, v) = get(api::router(state), "/api/news/all").await;
    assert_eq!(status, StatusCode::OK);
    let obj = v.as_object().expect("object");
    assert_eq!(obj.len(), 6);
    for c in NewsCategory::ALL {
        assert!(obj.contains_key(c.as_str()), "missing {c}");
    }
    assert_eq!(v["gov"].as_array().unwrap().len(), 0);
    assert_eq!(v["ai"][0]["id"], "tav-ai-0");
    assert_eq!(v["ai"][0]["isAlert"], false);
}

#[tokio::test]
async fn panels_and_presets_are_listed() {
    let app = api::router(state_for(&SearchConfig::default()));

    let (status, _, panels) = get(app.clone(), "/api/panels").await;
    assert_eq!(status, StatusCode::OK);
    let panels = panels.as_array().unwrap();
    assert_eq!(panels.len(), 25);
    assert_eq!(panels[0]["id"], "map");
    assert_eq!(panels[0]["draggable"], false);
    assert_eq!(panels[1]["name"], "世界 / 地缘政治");

    let (_, _, presets) = get(app, "/api/presets").await;
    let presets = presets.as_array().unwrap();
    assert_eq!(presets.len(), 6);
    assert_eq!(presets[0]["id"], "news-junkie");
    assert_eq!(presets[4]["panels"], serde_json::json!(["map", "politics", "markets"]));
}
