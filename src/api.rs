// src/api.rs
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use metrics::counter;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::config::panels::{panel_entries, PanelEntry};
use crate::config::presets::{Preset, PRESETS};
use crate::config::search::SearchConfig;
use crate::news::keywords::KeywordTables;
use crate::news::providers::tavily::{SearchError, TavilyClient};
use crate::news::types::{CategoryNews, NewsCategory, SearchHit};
use crate::news::{fetch_all_news, NewsSource};

#[derive(Clone)]
pub struct AppState {
    /// Backs the single-category proxy route.
    pub search: Arc<TavilyClient>,
    /// Backs the orchestrated `/api/news/all` route.
    pub news: Arc<dyn NewsSource>,
    pub category_delay: Duration,
}

impl AppState {
    pub fn from_config(cfg: &SearchConfig, keywords: Arc<KeywordTables>) -> Result<Self> {
        let search = Arc::new(TavilyClient::new(cfg, keywords)?);
        Ok(Self {
            news: search.clone(),
            search,
            category_delay: cfg.category_delay,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/news", get(category_news))
        .route("/api/news/all", get(all_news))
        .route("/api/panels", get(panels))
        .route("/api/presets", get(presets))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct NewsQuery {
    #[serde(default)]
    category: Option<String>,
}

#[derive(serde::Serialize)]
struct CategoryResponse {
    category: NewsCategory,
    results: Vec<SearchHit>,
}

async fn category_news(State(state): State<AppState>, Query(q): Query<NewsQuery>) -> Response {
    let category = NewsCategory::from_param(q.category.as_deref());

    match state
        .search
        .try_search(category.query(), state.search.max_results())
        .await
    {
        Ok(hits) => {
            let results = state.search.filter().prefer_domestic(hits);
            tracing::info!(target: "news", %category, count = results.len(), "proxy search ok");
            (
                [(header::CACHE_CONTROL, "max-age=60")],
                Json(CategoryResponse { category, results }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(target: "news", %category, error = %e, "proxy search failed");
            counter!("news_search_errors_total", "provider" => "api").increment(1);
            search_error_response(e)
        }
    }
}

fn search_error_response(err: SearchError) -> Response {
    let (status, body) = match err {
        SearchError::MissingApiKey => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Tavily API key not configured" }),
        ),
        SearchError::Upstream {
            status,
            status_text,
            body,
        } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            json!({ "error": "tavily_error", "statusText": status_text, "body": body }),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "internal_error", "message": other.to_string() }),
        ),
    };
    (status, Json(body)).into_response()
}

async fn all_news(State(state): State<AppState>) -> Json<CategoryNews> {
    Json(fetch_all_news(state.news.as_ref(), state.category_delay).await)
}

async fn panels() -> Json<Vec<PanelEntry>> {
    Json(panel_entries())
}

async fn presets() -> Json<&'static [Preset]> {
    Json(PRESETS)
}
