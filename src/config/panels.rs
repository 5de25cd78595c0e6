// src/config/panels.rs
//! Dashboard panel table. Static; loaded once, never mutated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Map,
    Politics,
    Tech,
    Finance,
    Gov,
    Heatmap,
    Markets,
    Monitors,
    Commodities,
    Crypto,
    Polymarket,
    Whales,
    Mainchar,
    Printer,
    Contracts,
    Ai,
    Layoffs,
    Venezuela,
    Greenland,
    Iran,
    Leaders,
    Intel,
    Correlation,
    Narrative,
    Fed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelConfig {
    pub name: &'static str,
    /// 1 = core, 3 = niche.
    pub priority: u8,
}

pub const PANEL_ORDER: [PanelId; 25] = [
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
    PanelId::Fed,
];

pub const NON_DRAGGABLE_PANELS: &[PanelId] = &[PanelId::Map];

pub const MAP_ZOOM_MIN: f32 = 1.0;
pub const MAP_ZOOM_MAX: f32 = 4.0;
pub const MAP_ZOOM_STEP: f32 = 0.5;

pub fn panel_config(id: PanelId) -> PanelConfig {
    let (name, priority) = match id {
        PanelId::Map => ("全球地图", 1),
        PanelId::Politics => ("世界 / 地缘政治", 1),
        PanelId::Tech => ("科技 / 人工智能", 1),
        PanelId::Finance => ("金融", 1),
        PanelId::Gov => ("政府 / 政策", 2),
        PanelId::Heatmap => ("行业热力图", 1),
        PanelId::Markets => ("市场", 1),
        PanelId::Monitors => ("我的监控", 1),
        PanelId::Commodities => ("商品 / VIX", 2),
        PanelId::Crypto => ("加密货币", 2),
        PanelId::Polymarket => ("预测市场", 2),
        PanelId::Whales => ("链上巨鲸", 3),
        PanelId::Mainchar => ("舆论主角", 2),
        PanelId::Printer => ("印钞机", 2),
        PanelId::Contracts => ("政府合同", 3),
        PanelId::Ai => ("AI 军备竞赛", 3),
        PanelId::Layoffs => ("裁员追踪", 3),
        PanelId::Venezuela => ("委内瑞拉态势", 2),
        PanelId::Greenland => ("格陵兰态势", 2),
        PanelId::Iran => ("伊朗态势", 2),
        PanelId::Leaders => ("世界领导人", 1),
        PanelId::Intel => ("情报订阅", 2),
        PanelId::Correlation => ("相关性引擎", 1),
        PanelId::Narrative => ("叙事追踪", 1),
        PanelId::Fed => ("联邦储备", 1),
    };
    PanelConfig { name, priority }
}

pub fn is_draggable(id: PanelId) -> bool {
    !NON_DRAGGABLE_PANELS.contains(&id)
}

/// Flattened row for the `/api/panels` listing.
#[derive(Debug, Clone, Serialize)]
pub struct PanelEntry {
    pub id: PanelId,
    pub name: &'static str,
    pub priority: u8,
    pub draggable: bool,
}

pub fn panel_entries() -> Vec<PanelEntry> {
    PANEL_ORDER
        .into_iter()
        .map(|id| {
            let cfg = panel_config(id);
            PanelEntry {
                id,
                name: cfg.name,
                priority: cfg.priority,
                draggable: is_draggable(id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_are_in_range_and_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for id in PANEL_ORDER {
            assert!(seen.insert(id));
            assert!((1..=3).contains(&panel_config(id).priority));
        }
    }

    #[test]
    fn only_map_is_pinned() {
        let pinned: Vec<_> = panel_entries()
            .into_iter()
            .filter(|e| !e.draggable)
            .map(|e| e.id)
            .collect();
        assert_eq!(pinned, vec![PanelId::Map]);
        assert!(MAP_ZOOM_MIN < MAP_ZOOM_MAX);
    }
}
