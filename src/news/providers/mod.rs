// src/news/providers/mod.rs
pub mod proxy;
pub mod tavily;

use std::time::Duration;

use anyhow::{Context, Result};

pub(crate) const USER_AGENT: &str = concat!("news-monitor/", env!("CARGO_PKG_VERSION"));

/// Shared reqwest client setup for upstream calls.
pub(crate) fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(timeout.min(Duration::from_secs(4)))
        .timeout(timeout)
        .build()
        .context("building reqwest client")
}
