// src/config/keywords.rs
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::news::keywords::KeywordTables;

pub const ENV_KEYWORDS_PATH: &str = "NEWS_KEYWORDS_PATH";

/// Load keyword tables from an explicit path. Supports TOML or JSON formats.
pub fn load_keywords_from(path: &Path) -> Result<KeywordTables> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading keywords from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_keywords(&content, ext.as_str())
}

/// Load keyword tables using env var + fallbacks:
/// 1) $NEWS_KEYWORDS_PATH
/// 2) config/keywords.toml
/// 3) config/keywords.json
/// 4) built-in seed
pub fn load_keywords_default() -> Result<KeywordTables> {
    if let Ok(p) = std::env::var(ENV_KEYWORDS_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_keywords_from(&pb);
        } else {
            return Err(anyhow!("NEWS_KEYWORDS_PATH points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from("config/keywords.toml");
    if toml_p.exists() {
        return load_keywords_from(&toml_p);
    }
    let json_p = PathBuf::from("config/keywords.json");
    if json_p.exists() {
        return load_keywords_from(&json_p);
    }
    Ok(KeywordTables::default_seed())
}

fn parse_keywords(s: &str, hint_ext: &str) -> Result<KeywordTables> {
    let try_toml = hint_ext == "toml" || !s.trim_start().starts_with('{');
    if try_toml {
        if let Ok(v) = toml::from_str::<KeywordTables>(s) {
            return Ok(v.cleaned());
        }
    }
    if let Ok(v) = serde_json::from_str::<KeywordTables>(s) {
        return Ok(v.cleaned());
    }
    if !try_toml {
        if let Ok(v) = toml::from_str::<KeywordTables>(s) {
            return Ok(v.cleaned());
        }
    }
    Err(anyhow!("unsupported keywords format"))
}
