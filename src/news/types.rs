// src/news/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Closed set of news categories. Declaration order is the fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Politics,
    Tech,
    Finance,
    Gov,
    Ai,
    Intel,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 6] = [
        NewsCategory::Politics,
        NewsCategory::Tech,
        NewsCategory::Finance,
        NewsCategory::Gov,
        NewsCategory::Ai,
        NewsCategory::Intel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NewsCategory::Politics => "politics",
            NewsCategory::Tech => "tech",
            NewsCategory::Finance => "finance",
            NewsCategory::Gov => "gov",
            NewsCategory::Ai => "ai",
            NewsCategory::Intel => "intel",
        }
    }

    /// Search string sent upstream for this category.
    pub fn query(self) -> &'static str {
        match self {
            NewsCategory::Politics => "国内 政治 时事 新闻 重大事件",
            NewsCategory::Tech => "国内 科技 人工智能 互联网 新闻",
            NewsCategory::Finance => "国内 金融 经济 股市 新闻",
            NewsCategory::Gov => "国内 政府 政策 公告 新闻",
            NewsCategory::Ai => "国内 人工智能 大模型 科研 新闻",
            NewsCategory::Intel => "国内 安全 军事 国防 新闻",
        }
    }

    /// Lenient parse for query parameters: missing or unknown → `Politics`.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok())
            .unwrap_or(NewsCategory::Politics)
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown news category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for NewsCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        NewsCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| UnknownCategory(t.to_string()))
    }
}

/// One result as returned by the search provider (and relayed by the proxy route).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Display-ready news entry consumed by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub link: String,
    /// Fetch time, unix milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub source: String,
    pub category: NewsCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_alert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

/// Per-category result of one orchestrated fetch cycle.
pub type CategoryNews = BTreeMap<NewsCategory, Vec<NewsItem>>;

/// All six categories present, each with an empty list.
pub fn empty_category_news() -> CategoryNews {
    NewsCategory::ALL.into_iter().map(|c| (c, Vec::new())).collect()
}
