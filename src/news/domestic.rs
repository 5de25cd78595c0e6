// src/news/domestic.rs
//! Domestic-source preference.
//!
//! A URL counts as domestic when its host ends with the national top-level
//! suffix, or equals / is a subdomain of an allow-listed outlet. Anything that
//! does not parse as a URL with a host is treated as foreign.

use once_cell::sync::Lazy;
use url::Url;

use crate::news::types::SearchHit;

/// Curated outlets presumed to publish from the mainland.
pub const DOMESTIC_DOMAINS: &[&str] = &[
    "xinhuanet.com",
    "news.cn",
    "cctv.com",
    "people.com.cn",
    "chinadaily.com.cn",
    "thepaper.cn",
    "jiemian.com",
    "caixin.com",
    "36kr.com",
    "ifeng.com",
    "sina.com.cn",
    "sohu.com",
    "qq.com",
    "163.com",
    "yicai.com",
    "cnstock.com",
    "finance.sina.com.cn",
    "finance.qq.com",
    "finance.163.com",
    "news.sina.com.cn",
];

pub const DOMESTIC_TLD_SUFFIX: &str = ".cn";

static DEFAULT_FILTER: Lazy<DomesticFilter> = Lazy::new(DomesticFilter::default);

#[derive(Debug, Clone)]
pub struct DomesticFilter {
    domains: Vec<String>,
    tld_suffix: String,
}

impl Default for DomesticFilter {
    fn default() -> Self {
        Self::new(DOMESTIC_DOMAINS.iter().copied(), DOMESTIC_TLD_SUFFIX)
    }
}

impl DomesticFilter {
    pub fn new<I, S>(domains: I, tld_suffix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| normalize_host(d.as_ref()))
            .filter(|d| !d.is_empty())
            .collect();
        let suffix = tld_suffix.trim().to_ascii_lowercase();
        let tld_suffix = if suffix.is_empty() || suffix.starts_with('.') {
            suffix
        } else {
            format!(".{suffix}")
        };
        Self {
            domains,
            tld_suffix,
        }
    }

    /// Allow-listed domains, in configuration order (also sent upstream as `include_domains`).
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn is_domestic(&self, url: &str) -> bool {
        let Some(host) = hostname(url) else {
            return false;
        };
        if !self.tld_suffix.is_empty() && host.ends_with(&self.tld_suffix) {
            return true;
        }
        self.domains.iter().any(|d| {
            host == *d
                || host
                    .strip_suffix(d.as_str())
                    .is_some_and(|rest| rest.ends_with('.'))
        })
    }

    /// Stable partition: domestic hits first, original order kept inside each group.
    pub fn prefer_domestic(&self, hits: Vec<SearchHit>) -> Vec<SearchHit> {
        let (mut domestic, others): (Vec<_>, Vec<_>) =
            hits.into_iter().partition(|h| self.is_domestic(&h.url));
        domestic.extend(others);
        domestic
    }
}

/// Classify with the built-in allow-list.
pub fn is_domestic(url: &str) -> bool {
    DEFAULT_FILTER.is_domestic(url)
}

/// Reorder with the built-in allow-list.
pub fn prefer_domestic(hits: Vec<SearchHit>) -> Vec<SearchHit> {
    DEFAULT_FILTER.prefer_domestic(hits)
}

fn hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = normalize_host(parsed.host_str()?);
    (!host.is_empty()).then_some(host)
}

fn normalize_host(h: &str) -> String {
    h.trim().trim_end_matches('.').to_ascii_lowercase()
}
