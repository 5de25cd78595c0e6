// src/news/keywords.rs
//! # Keyword annotation
//!
//! Tags headlines with an alert flag, a coarse region and a list of topics
//! using plain keyword containment.
//!
//! - Case-insensitive.
//! - ASCII keywords only match on word boundaries ("war" ≠ "software").
//! - CJK keywords match anywhere (no word separators in Chinese text).
//! - First match wins for alerts and regions; topics collect every match.
//!
//! Tables come from `config::keywords` or the built-in `default_seed()`.

use serde::{Deserialize, Serialize};

/// Named group of keywords (a region or a topic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTables {
    #[serde(default)]
    pub alerts: Vec<String>,
    #[serde(default)]
    pub regions: Vec<KeywordGroup>,
    #[serde(default)]
    pub topics: Vec<KeywordGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertMatch {
    pub is_alert: bool,
    pub keyword: Option<String>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::default_seed()
    }
}

impl KeywordTables {
    pub fn check_alert(&self, text: &str) -> AlertMatch {
        let hay = text.to_lowercase();
        match self.alerts.iter().find(|k| keyword_matches(&hay, k)) {
            Some(k) => AlertMatch {
                is_alert: true,
                keyword: Some(k.clone()),
            },
            None => AlertMatch::default(),
        }
    }

    pub fn detect_region(&self, text: &str) -> Option<String> {
        let hay = text.to_lowercase();
        self.regions
            .iter()
            .find(|g| g.keywords.iter().any(|k| keyword_matches(&hay, k)))
            .map(|g| g.name.clone())
    }

    pub fn detect_topics(&self, text: &str) -> Vec<String> {
        let hay = text.to_lowercase();
        let mut out: Vec<String> = Vec::new();
        for g in &self.topics {
            if out.contains(&g.name) {
                continue;
            }
            if g.keywords.iter().any(|k| keyword_matches(&hay, k)) {
                out.push(g.name.clone());
            }
        }
        out
    }

    /// Trim everything, drop blanks and empty groups. Used after loading from disk.
    pub fn cleaned(self) -> Self {
        fn clean(list: Vec<String>) -> Vec<String> {
            let mut out: Vec<String> = Vec::with_capacity(list.len());
            for k in list {
                let t = k.trim();
                if !t.is_empty() && !out.iter().any(|o| o == t) {
                    out.push(t.to_string());
                }
            }
            out
        }
        fn clean_groups(groups: Vec<KeywordGroup>) -> Vec<KeywordGroup> {
            groups
                .into_iter()
                .filter_map(|g| {
                    let name = g.name.trim().to_string();
                    let keywords = clean(g.keywords);
                    (!name.is_empty() && !keywords.is_empty())
                        .then_some(KeywordGroup { name, keywords })
                })
                .collect()
        }
        Self {
            alerts: clean(self.alerts),
            regions: clean_groups(self.regions),
            topics: clean_groups(self.topics),
        }
    }

    /// Built-in tables used when no keyword config is found.
    pub fn default_seed() -> Self {
        fn group(name: &str, kws: &[&str]) -> KeywordGroup {
            KeywordGroup {
                name: name.to_string(),
                keywords: kws.iter().map(|s| s.to_string()).collect(),
            }
        }

        let alerts = [
            "突发", "紧急", "快讯", "战争", "开战", "袭击", "爆炸", "地震", "入侵", "导弹",
            "制裁", "政变", "戒严", "恐袭", "空袭", "breaking", "urgent", "war", "attack",
            "explosion", "earthquake", "invasion", "missile", "sanctions", "coup",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let regions = vec![
            group(
                "ASIA",
                &[
                    "台湾", "台海", "香港", "日本", "韩国", "朝鲜", "东盟", "南海", "印度", "taiwan",
                    "japan", "korea", "asean", "india",
                ],
            ),
            group(
                "MIDEAST",
                &[
                    "中东", "伊朗", "以色列", "加沙", "叙利亚", "沙特", "也门", "iran", "israel",
                    "gaza", "syria", "saudi", "yemen",
                ],
            ),
            group(
                "EUROPE",
                &[
                    "欧洲", "欧盟", "乌克兰", "俄罗斯", "英国", "德国", "法国", "北约", "europe",
                    "eu", "ukraine", "russia", "nato",
                ],
            ),
            group(
                "AMERICAS",
                &[
                    "美国", "白宫", "华盛顿", "加拿大", "委内瑞拉", "格陵兰", "巴西", "墨西哥",
                    "united states", "white house", "washington", "venezuela", "greenland",
                ],
            ),
            group(
                "AFRICA",
                &["非洲", "苏丹", "埃及", "尼日利亚", "africa", "sudan", "egypt", "nigeria"],
            ),
        ];

        let topics = vec![
            group(
                "ai",
                &["人工智能", "大模型", "算力", "ai", "llm", "openai", "deepseek"],
            ),
            group("chips", &["芯片", "半导体", "光刻", "chip", "semiconductor"]),
            group(
                "economy",
                &["经济", "gdp", "通胀", "降息", "加息", "央行", "利率", "inflation"],
            ),
            group("markets", &["股市", "a股", "港股", "债市", "汇率", "stocks"]),
            group("trade", &["关税", "贸易", "出口", "进口", "tariff", "trade"]),
            group(
                "defense",
                &["军事", "国防", "军演", "解放军", "航母", "military", "defense"],
            ),
            group("energy", &["能源", "石油", "原油", "天然气", "oil", "gas"]),
            group("policy", &["政策", "国务院", "发改委", "两会", "条例", "policy"]),
            group("crypto", &["比特币", "加密货币", "区块链", "bitcoin", "crypto"]),
        ];

        Self {
            alerts,
            regions,
            topics,
        }
    }
}

/// `hay` must already be lowercased.
fn keyword_matches(hay: &str, keyword: &str) -> bool {
    let kw = keyword.trim().to_lowercase();
    if kw.is_empty() {
        return false;
    }
    if !kw.is_ascii() {
        return hay.contains(&kw);
    }
    hay.match_indices(&kw).any(|(start, m)| {
        let before = hay[..start].chars().next_back();
        let after = hay[start + m.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
