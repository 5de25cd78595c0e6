//! Runs one orchestrated fetch cycle and prints the per-category result as JSON.
//!
//! Direct mode (Tavily) by default; proxy mode when `NEWS_PROXY_URL` is set.

use std::sync::Arc;

use anyhow::Context;
use news_monitor::config::{keywords::load_keywords_default, search::SearchConfig};
use news_monitor::news::providers::{proxy::ProxyClient, tavily::TavilyClient};
use news_monitor::{fetch_all_news, NewsSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    news_monitor::telemetry::init_tracing();

    let cfg = SearchConfig::from_env();
    let keywords = Arc::new(load_keywords_default().context("loading keyword tables")?);

    let source: Box<dyn NewsSource> = match cfg.proxy_url.as_deref() {
        Some(base) => Box::new(ProxyClient::new(base, cfg.http_timeout, keywords)?),
        None => Box::new(TavilyClient::new(&cfg, keywords)?),
    };
    tracing::info!(source = source.name(), "news snapshot starting");

    let news = fetch_all_news(source.as_ref(), cfg.category_delay).await;
    println!("{}", serde_json::to_string_pretty(&news)?);
    Ok(())
}
