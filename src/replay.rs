//! レイアウトファイルを使ったスクロールの再現
//!
//! ブラウザの代わりに `StaticViewport` を与え、指定位置でのビュー状態を求める。

use crate::error::{Result, SiteError};
use portfolio_common::{ObserverConfig, ScrollObserver, ScrollState, SectionRegistry, StaticViewport};
use serde::Serialize;
use std::path::Path;

/// ある位置でのビュー状態
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub state: ScrollState,
    /// これまでに一度でも表示されたセクション（登録順）
    pub revealed: Vec<String>,
    /// 計測できずにスキップしたセクション
    pub skipped: Vec<String>,
}

pub fn load_layout(path: &Path) -> Result<StaticViewport> {
    if !path.exists() {
        return Err(SiteError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let viewport: StaticViewport = serde_json::from_str(&content)?;
    if viewport.viewport_height <= 0.0 {
        return Err(SiteError::InvalidLayout(
            "viewportHeight は正の値で指定してください".into(),
        ));
    }
    Ok(viewport)
}

/// 走査の最小刻み(px)
pub const MIN_SWEEP_STEP: f64 = 1.0;
/// 走査で評価する位置の上限
pub const MAX_SWEEP_POSITIONS: usize = 100_000;

/// 文書末尾までを `step` 刻みにした位置
pub fn sweep_positions(viewport: &StaticViewport, step: f64) -> Result<Vec<f64>> {
    if step.is_nan() || step < MIN_SWEEP_STEP {
        return Err(SiteError::InvalidLayout(format!(
            "刻み幅は{}px以上で指定してください: {}",
            MIN_SWEEP_STEP, step
        )));
    }
    let bottom = viewport
        .boxes
        .values()
        .map(|b| b.bottom())
        .fold(0.0, f64::max);
    let last = (bottom - viewport.viewport_height).max(0.0);
    let count = (last / step).ceil() + 1.0;
    if count > MAX_SWEEP_POSITIONS as f64 {
        return Err(SiteError::InvalidLayout(format!(
            "走査位置が多すぎます（{}件、上限{}件）",
            count, MAX_SWEEP_POSITIONS
        )));
    }

    let mut positions = Vec::new();
    let mut y = 0.0;
    while y < last {
        positions.push(y);
        y += step;
    }
    positions.push(last);
    Ok(positions)
}

/// 各位置へ順にスクロールした直後の状態
///
/// 全セクションを登場アニメーション対象として登録し、初回描画済みとして扱う。
pub fn replay(
    registry: &SectionRegistry,
    config: &ObserverConfig,
    layout: &StaticViewport,
    positions: &[f64],
) -> Vec<Snapshot> {
    let mut observer = ScrollObserver::new(registry.clone(), config.clone());
    observer.attach();
    for section in registry.iter() {
        observer.watch(&section.id, true);
    }
    observer.mark_painted();

    let mut viewport = layout.clone();
    positions
        .iter()
        .map(|&y| {
            viewport.scroll_to(y);
            let report = observer.tick(&viewport);
            Snapshot {
                state: observer.state().clone(),
                revealed: revealed_ids(&observer),
                skipped: report.skipped,
            }
        })
        .collect()
}

fn revealed_ids(observer: &ScrollObserver) -> Vec<String> {
    observer
        .visibility()
        .records()
        .iter()
        .filter(|r| r.has_been_visible)
        .map(|r| r.element_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> StaticViewport {
        StaticViewport::stacked(
            800.0,
            &[
                ("home", 900.0),
                ("about", 700.0),
                ("experience", 800.0),
                ("skills", 600.0),
                ("projects", 900.0),
                ("research", 700.0),
                ("certifications", 500.0),
                ("contact", 800.0),
            ],
        )
    }

    #[test]
    fn test_sweep_ends_at_last_scrollable_position() {
        let positions = sweep_positions(&layout(), 1000.0).unwrap();
        // 文書高さ5900 - ビューポート800
        assert_eq!(positions.last(), Some(&5100.0));
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions.len(), 7);
    }

    #[test]
    fn test_sweep_rejects_zero_step() {
        assert!(sweep_positions(&layout(), 0.0).is_err());
    }

    #[test]
    fn test_sweep_rejects_sub_pixel_step() {
        let result = sweep_positions(&layout(), 1e-9);
        assert!(matches!(result, Err(SiteError::InvalidLayout(_))));
        assert!(matches!(sweep_positions(&layout(), f64::NAN), Err(SiteError::InvalidLayout(_))));
    }

    #[test]
    fn test_sweep_rejects_too_many_positions() {
        let tall = StaticViewport::new(800.0).with_box("home", 0.0, 1_000_000.0);
        let result = sweep_positions(&tall, 1.0);
        assert!(matches!(result, Err(SiteError::InvalidLayout(_))));
        assert_eq!(sweep_positions(&tall, 100.0).unwrap().len(), 9993);
    }

    #[test]
    fn test_replay_tracks_active_section() {
        let registry = SectionRegistry::portfolio();
        let config = ObserverConfig::default();
        let snapshots = replay(&registry, &config, &layout(), &[0.0, 850.0, 5100.0]);

        assert_eq!(snapshots[0].state.active_section_id.as_deref(), Some("home"));
        assert!(!snapshots[0].state.show_scroll_top);
        assert_eq!(snapshots[1].state.active_section_id.as_deref(), Some("about"));
        assert!(snapshots[1].state.header_scrolled);
        assert_eq!(snapshots[2].state.active_section_id.as_deref(), Some("contact"));
        assert!(snapshots[2].state.show_scroll_top);
    }

    #[test]
    fn test_replay_reveal_is_cumulative() {
        let registry = SectionRegistry::portfolio();
        let config = ObserverConfig::default();
        let snapshots = replay(&registry, &config, &layout(), &[0.0, 5100.0, 0.0]);

        assert_eq!(snapshots[0].revealed, vec!["home".to_string()]);
        assert!(snapshots[1].revealed.contains(&"contact".to_string()));
        // 先頭に戻っても表示済みは取り消されない
        assert_eq!(snapshots[2].revealed, snapshots[1].revealed);
    }

    #[test]
    fn test_replay_skips_missing_sections() {
        let registry = SectionRegistry::portfolio();
        let mut layout = layout();
        layout.remove("research");
        let snapshots = replay(&registry, &ObserverConfig::default(), &layout, &[0.0]);
        assert_eq!(snapshots[0].skipped, vec!["research".to_string()]);
    }
}
