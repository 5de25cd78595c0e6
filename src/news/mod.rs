// src/news/mod.rs
pub mod domestic;
pub mod keywords;
pub mod providers;
pub mod types;

use std::time::Duration;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use once_cell::sync::OnceCell;

use crate::news::domestic::DomesticFilter;
use crate::news::keywords::KeywordTables;
use crate::news::types::{empty_category_news, CategoryNews, NewsCategory, NewsItem, SearchHit};

pub const NEWS_SOURCE_LABEL: &str = "Tavily";
pub const FALLBACK_TITLE: &str = "新闻";
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// One-time metrics registration (so series show up on /metrics).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "news_search_requests_total",
            "Upstream search requests issued."
        );
        describe_counter!(
            "news_search_errors_total",
            "Upstream search requests that ended empty due to an error."
        );
        describe_histogram!("news_search_ms", "Upstream search latency in milliseconds.");
        describe_counter!("news_items_total", "News items produced per category fetch.");
        describe_gauge!(
            "news_fetch_last_run_ts",
            "Unix ts when the category orchestrator last completed."
        );
    });
}

/// Anything that can produce the items of one category. Failures surface as an empty list.
#[async_trait::async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_category(&self, category: NewsCategory) -> Vec<NewsItem>;
    fn name(&self) -> &'static str;
}

/// Normalize text: decode entities, strip tags, collapse whitespace, trim.
pub fn normalize_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: OnceCell<regex::Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][^<>]*>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();
    out.trim().to_string()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Reorder hits (domestic first) and turn them into annotated `NewsItem`s.
///
/// Ids are `tav-{category}-{index}` over the reordered list; all items share `now_ms`.
pub fn build_news_items(
    category: NewsCategory,
    hits: Vec<SearchHit>,
    filter: &DomesticFilter,
    keywords: &KeywordTables,
    now_ms: i64,
) -> Vec<NewsItem> {
    filter
        .prefer_domestic(hits)
        .into_iter()
        .enumerate()
        .map(|(index, hit)| {
            let title = [normalize_text(&hit.title), hit.url.trim().to_string()]
                .into_iter()
                .find(|s| !s.is_empty())
                .unwrap_or_else(|| FALLBACK_TITLE.to_string());

            let content = hit
                .content
                .as_deref()
                .map(normalize_text)
                .filter(|c| !c.is_empty());
            let description = content
                .as_deref()
                .map(|c| truncate_chars(c, DESCRIPTION_MAX_CHARS));

            let alert = keywords.check_alert(&title);
            let region = keywords.detect_region(&title);
            let topics = keywords.detect_topics(&title);

            NewsItem {
                id: format!("tav-{category}-{index}"),
                link: hit.url,
                timestamp: now_ms,
                description,
                content,
                source: NEWS_SOURCE_LABEL.to_string(),
                category,
                is_alert: Some(alert.is_alert),
                alert_keyword: alert.keyword,
                region,
                topics: Some(topics),
                title,
            }
        })
        .collect()
}

/// Fetch every category sequentially, sleeping `delay` between calls (not before the first).
///
/// The returned map always holds all six categories; a failed category is an empty list.
pub async fn fetch_all_news(source: &dyn NewsSource, delay: Duration) -> CategoryNews {
    ensure_metrics_described();
    let mut result = empty_category_news();

    for (i, category) in NewsCategory::ALL.into_iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let items = source.fetch_category(category).await;
        tracing::info!(
            target: "news",
            source = source.name(),
            %category,
            count = items.len(),
            "category fetched"
        );
        counter!("news_items_total", "category" => category.as_str()).increment(items.len() as u64);
        result.insert(category, items);
    }

    gauge!("news_fetch_last_run_ts").set(chrono::Utc::now().timestamp().max(0) as f64);
    result
}
