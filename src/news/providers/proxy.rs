// src/news/providers/proxy.rs
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::counter;
use serde::Deserialize;

use crate::news::domestic::DomesticFilter;
use crate::news::keywords::KeywordTables;
use crate::news::types::{NewsCategory, NewsItem, SearchHit};
use crate::news::{build_news_items, now_millis, NewsSource};

#[derive(Debug, Deserialize)]
struct ProxyResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Reads categories through a running instance's `/api/news` route.
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
    filter: DomesticFilter,
    keywords: Arc<KeywordTables>,
}

impl ProxyClient {
    pub fn new(base_url: &str, timeout: Duration, keywords: Arc<KeywordTables>) -> Result<Self> {
        Ok(Self {
            http: super::build_http_client(timeout)?,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            filter: DomesticFilter::default(),
            keywords,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/news", self.base_url)
    }

    async fn fetch_hits(&self, category: NewsCategory) -> Result<Vec<SearchHit>> {
        let resp = self
            .http
            .get(self.endpoint())
            .query(&[("category", category.as_str())])
            .send()
            .await
            .context("proxy http get()")?
            .error_for_status()
            .context("proxy http status")?;
        let body: ProxyResponse = resp.json().await.context("proxy json body")?;
        Ok(body.results)
    }
}

#[async_trait]
impl NewsSource for ProxyClient {
    async fn fetch_category(&self, category: NewsCategory) -> Vec<NewsItem> {
        match self.fetch_hits(category).await {
            Ok(hits) => build_news_items(category, hits, &self.filter, &self.keywords, now_millis()),
            Err(e) => {
                tracing::warn!(error = ?e, provider = "proxy", %category, "proxy fetch failed");
                counter!("news_search_errors_total", "provider" => "proxy").increment(1);
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "proxy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let c = ProxyClient::new(
            "http://localhost:8000/ ",
            Duration::from_secs(1),
            Arc::new(KeywordTables::default_seed()),
        )
        .unwrap();
        assert_eq!(c.endpoint(), "http://localhost:8000/api/news");
    }

    #[tokio::test]
    async fn unreachable_proxy_yields_empty() {
        // Port 9 (discard) on localhost is closed in test environments.
        let c = ProxyClient::new(
            "http://127.0.0.1:9",
            Duration::from_millis(500),
            Arc::new(KeywordTables::default_seed()),
        )
        .unwrap();
        assert!(c.fetch_category(NewsCategory::Finance).await.is_empty());
    }
}
