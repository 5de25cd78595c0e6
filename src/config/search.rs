// src/config/search.rs
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";
pub const DEFAULT_MAX_RESULTS: u32 = 20;
pub const DEFAULT_CATEGORY_DELAY_MS: u64 = 500;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_KEY: &str = "TAVILY_API_KEY";
/// Key name used by the dashboard build; checked first.
pub const ENV_API_KEY_VITE: &str = "VITE_TAVILY_API_KEY";
pub const ENV_BASE_URL: &str = "TAVILY_BASE_URL";
pub const ENV_SEARCH_DEPTH: &str = "TAVILY_SEARCH_DEPTH";
pub const ENV_MAX_RESULTS: &str = "NEWS_MAX_RESULTS";
pub const ENV_CATEGORY_DELAY_MS: &str = "NEWS_CATEGORY_DELAY_MS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "NEWS_HTTP_TIMEOUT_SECS";
pub const ENV_PROXY_URL: &str = "NEWS_PROXY_URL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

impl SearchDepth {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(SearchDepth::Basic),
            "advanced" => Some(SearchDepth::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub search_depth: SearchDepth,
    /// 1..=20 (provider cap).
    pub max_results: u32,
    pub category_delay: Duration,
    pub http_timeout: Duration,
    /// Base URL of a running instance; enables proxy mode in the snapshot binary.
    pub proxy_url: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_TAVILY_ENDPOINT.to_string(),
            search_depth: SearchDepth::Basic,
            max_results: DEFAULT_MAX_RESULTS,
            category_delay: Duration::from_millis(DEFAULT_CATEGORY_DELAY_MS),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            proxy_url: None,
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary key lookup. Blank or unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| {
            lookup(k)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let d = Self::default();

        let max_results = get(ENV_MAX_RESULTS)
            .and_then(|v| v.parse::<u32>().ok())
            .map(|n| n.clamp(1, DEFAULT_MAX_RESULTS))
            .unwrap_or(d.max_results);

        let category_delay = get(ENV_CATEGORY_DELAY_MS)
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(d.category_delay);

        let http_timeout = get(ENV_HTTP_TIMEOUT_SECS)
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
            .unwrap_or(d.http_timeout);

        Self {
            api_key: get(ENV_API_KEY_VITE).or_else(|| get(ENV_API_KEY)),
            endpoint: get(ENV_BASE_URL).unwrap_or(d.endpoint),
            search_depth: get(ENV_SEARCH_DEPTH)
                .as_deref()
                .and_then(SearchDepth::parse)
                .unwrap_or(d.search_depth),
            max_results,
            category_delay,
            http_timeout,
            proxy_url: get(ENV_PROXY_URL),
        }
    }
}
