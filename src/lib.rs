// src/lib.rs
// Public library surface for integration tests and the binaries.

pub mod api;
pub mod config;
pub mod news;
pub mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::news::types::{CategoryNews, NewsCategory, NewsItem, SearchHit};
pub use crate::news::{fetch_all_news, NewsSource};

/// Build the full in-process app (API routes + `/metrics`) from the environment.
pub async fn app() -> anyhow::Result<Router> {
    let cfg = config::search::SearchConfig::from_env();
    if cfg.api_key.is_none() {
        tracing::warn!("no Tavily API key configured; news routes will return errors/empty lists");
    }

    let keywords = config::keywords::load_keywords_default().context("loading keyword tables")?;
    let state = AppState::from_config(&cfg, Arc::new(keywords))?;
    let metrics = telemetry::Metrics::init()?;

    Ok(router(state).merge(metrics.router()))
}
