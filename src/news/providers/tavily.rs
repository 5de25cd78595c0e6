// src/news/providers/tavily.rs
//! Tavily search client.
//!
//! `try_search` surfaces every failure as a `SearchError` (the proxy route maps
//! them to HTTP statuses); `search` and the `NewsSource` impl degrade to an
//! empty list and only log. No retry, no backoff.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};

use crate::config::search::{SearchConfig, SearchDepth};
use crate::news::domestic::DomesticFilter;
use crate::news::keywords::KeywordTables;
use crate::news::types::{NewsCategory, NewsItem, SearchHit};
use crate::news::{build_news_items, ensure_metrics_described, now_millis, NewsSource};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Tavily API key not configured")]
    MissingApiKey,
    #[error("upstream returned HTTP {status}: {status_text}")]
    Upstream {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: SearchDepth,
    max_results: u32,
    include_domains: &'a [String],
    include_answer: bool,
    include_raw_content: bool,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

pub struct TavilyClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    search_depth: SearchDepth,
    max_results: u32,
    filter: DomesticFilter,
    keywords: Arc<KeywordTables>,
}

impl TavilyClient {
    pub fn new(cfg: &SearchConfig, keywords: Arc<KeywordTables>) -> Result<Self> {
        Ok(Self {
            http: super::build_http_client(cfg.http_timeout)?,
            endpoint: cfg.endpoint.clone(),
            api_key: cfg.api_key.clone(),
            search_depth: cfg.search_depth,
            max_results: cfg.max_results,
            filter: DomesticFilter::default(),
            keywords,
        })
    }

    pub fn with_filter(mut self, filter: DomesticFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> &DomesticFilter {
        &self.filter
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// One POST to the search endpoint, results in upstream order.
    pub async fn try_search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchHit>, SearchError> {
        ensure_metrics_described();
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        let req = TavilyRequest {
            api_key,
            query,
            search_depth: self.search_depth,
            max_results,
            include_domains: self.filter.domains(),
            include_answer: false,
            include_raw_content: false,
        };

        counter!("news_search_requests_total").increment(1);
        let t0 = std::time::Instant::now();

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&req)
            .send()
            .await
            .map_err(SearchError::Transport)?;
        histogram!("news_search_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let parsed: TavilyResponse = resp.json().await.map_err(SearchError::Decode)?;
        Ok(parsed.results)
    }

    /// Fail-to-empty wrapper around `try_search`.
    pub async fn search(&self, query: &str, max_results: u32) -> Vec<SearchHit> {
        match self.try_search(query, max_results).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(error = %e, provider = "tavily", "search failed, returning no results");
                counter!("news_search_errors_total", "provider" => "tavily").increment(1);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl NewsSource for TavilyClient {
    async fn fetch_category(&self, category: NewsCategory) -> Vec<NewsItem> {
        tracing::debug!(target: "news", %category, "fetching via tavily");
        let hits = self.search(category.query(), self.max_results).await;
        build_news_items(category, hits, &self.filter, &self.keywords, now_millis())
    }

    fn name(&self) -> &'static str {
        "tavily"
    }
}
