// src/config/presets.rs
//! Onboarding presets offered to first-time users.

use serde::Serialize;

use crate::config::panels::PanelId;

pub const ONBOARDING_STORAGE_KEY: &str = "onboardingComplete";
pub const PRESET_STORAGE_KEY: &str = "selectedPreset";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub panels: &'static [PanelId],
}

/// Preset ids, in display order.
pub const PRESET_ORDER: [&str; 6] = [
    "news-junkie",
    "trader",
    "geopolitics",
    "intel",
    "minimal",
    "everything",
];

/// All presets, in `PRESET_ORDER`.
pub const PRESETS: &[Preset] = &[
    Preset {
        id: "news-junkie",
        name: "新闻速览",
        icon: "📰",
        description: "快速浏览政治、科技与金融领域的最新新闻",
        panels: &[
            PanelId::Politics,
            PanelId::Tech,
            PanelId::Finance,
            PanelId::Gov,
            PanelId::Ai,
            PanelId::Mainchar,
            PanelId::Map,
        ],
    },
    Preset {
        id: "trader",
        name: "交易员",
        icon: "📈",
        description: "以市场为中心，包含股票、加密货币与大宗商品",
        panels: &[
            PanelId::Markets,
            PanelId::Heatmap,
            PanelId::Commodities,
            PanelId::Crypto,
            PanelId::Polymarket,
            PanelId::Whales,
            PanelId::Printer,
            PanelId::Finance,
            PanelId::Map,
        ],
    },
    Preset {
        id: "geopolitics",
        name: "地缘观察",
        icon: "🌍",
        description: "全球态势与重点地区热点",
        panels: &[
            PanelId::Map,
            PanelId::Intel,
            PanelId::Leaders,
            PanelId::Politics,
            PanelId::Gov,
            PanelId::Venezuela,
            PanelId::Greenland,
            PanelId::Iran,
            PanelId::Correlation,
            PanelId::Narrative,
        ],
    },
    Preset {
        id: "intel",
        name: "情报分析员",
        icon: "🔍",
        description: "深度分析、模式识别与叙事追踪",
        panels: &[
            PanelId::Map,
            PanelId::Intel,
            PanelId::Leaders,
            PanelId::Correlation,
            PanelId::Narrative,
            PanelId::Mainchar,
            PanelId::Politics,
        ],
    },
    Preset {
        id: "minimal",
        name: "精简",
        icon: "⚡",
        description: "只保留核心：地图、新闻与市场",
        panels: &[PanelId::Map, PanelId::Politics, PanelId::Markets],
    },
    Preset {
        id: "everything",
        name: "全部",
        icon: "🎛️",
        description: "全功能：启用所有面板",
        panels: &[
            PanelId::Map,
            PanelId::Politics,
            PanelId::Tech,
            PanelId::Finance,
            PanelId::Gov,
            PanelId::Heatmap,
            PanelId::Markets,
            PanelId::Monitors,
            PanelId::Commodities,
            PanelId::Crypto,
            PanelId::Polymarket,
            PanelId::Whales,
            PanelId::Mainchar,
            PanelId::Printer,
            PanelId::Contracts,
            PanelId::Ai,
            PanelId::Layoffs,
            PanelId::Venezuela,
            PanelId::Greenland,
            PanelId::Iran,
            PanelId::Leaders,
            PanelId::Intel,
            PanelId::Correlation,
            PanelId::Narrative,
        ],
    },
];

pub fn preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}
