//! スクロール監視
//!
//! スクロール位置と各セクションのレイアウトから以下を導出する:
//! - アクティブなセクションid（ナビゲーションのハイライト用）
//! - 「トップへ戻る」ボタンの表示可否
//! - ヘッダーのコンパクト表示
//! - 登場アニメーションの可視ラッチ
//!
//! 計測に失敗した要素はそのティックだけスキップし、`tick` 自体は失敗しない。

use crate::config::ObserverConfig;
use crate::sections::SectionRegistry;
use crate::viewport::ViewportProvider;
use crate::visibility::{VisibilityChange, VisibilityTracker};
use serde::Serialize;

/// スクロールから導出される表示状態
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    pub scroll_y: f64,
    pub active_section_id: Option<String>,
    /// 「トップへ戻る」ボタンを表示するか
    pub show_scroll_top: bool,
    /// ヘッダーをコンパクト表示にするか
    pub header_scrolled: bool,
    /// 今回のティックでプローブ位置がいずれかのセクションに入ったか
    pub probe_hit: bool,
}

/// プローブ位置 `scroll_y + probe_offset` を含むセクションを探す
///
/// レジストリ順に走査し、複数一致した場合は最後の一致を採用する。
/// 計測できないセクションは候補から外す。
pub fn active_section<V>(registry: &SectionRegistry, viewport: &V, probe_offset: f64) -> Option<String>
where
    V: ViewportProvider + ?Sized,
{
    let probe = viewport.scroll_y().max(0.0) + probe_offset;
    let mut active = None;
    for section in registry.iter() {
        let Ok(layout) = viewport.measure(&section.id) else {
            continue;
        };
        if layout.contains(probe) {
            active = Some(section.id.clone());
        }
    }
    active
}

/// 1ティック分の結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// ScrollStateが変化したか
    pub state_changed: bool,
    /// 可視になった要素
    pub revealed: Vec<String>,
    /// 非可視に戻った要素（`trigger_once` でない要素のみ）
    pub hidden: Vec<String>,
    /// 計測に失敗してスキップした要素
    pub skipped: Vec<String>,
}

/// スクロール監視コントローラ
///
/// `attach` から `detach` までの間だけティックを処理する。
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    config: ObserverConfig,
    registry: SectionRegistry,
    state: ScrollState,
    visibility: VisibilityTracker,
    attached: bool,
    painted: bool,
}

impl ScrollObserver {
    pub fn new(registry: SectionRegistry, config: ObserverConfig) -> Self {
        let visibility = VisibilityTracker::new(config.visibility_threshold);
        Self {
            config,
            registry,
            state: ScrollState::default(),
            visibility,
            attached: false,
            painted: false,
        }
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// 監視を終了し、全ての可視監視を解除する
    pub fn detach(&mut self) {
        self.attached = false;
        self.visibility.unregister_all();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// 初回描画の完了を通知する。これ以前は可視判定を行わない
    pub fn mark_painted(&mut self) {
        self.painted = true;
    }

    /// 登場アニメーション対象の要素を登録
    pub fn watch(&mut self, element_id: &str, trigger_once: bool) {
        self.visibility.register(element_id, trigger_once);
    }

    pub fn unwatch(&mut self, element_id: &str) {
        self.visibility.unregister(element_id);
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn visibility(&self) -> &VisibilityTracker {
        &self.visibility
    }

    pub fn is_visible(&self, element_id: &str) -> bool {
        self.visibility.is_visible(element_id)
    }

    /// スクロール・リサイズ・初回描画のたびに呼ぶ
    pub fn tick<V>(&mut self, viewport: &V) -> TickReport
    where
        V: ViewportProvider + ?Sized,
    {
        let mut report = TickReport::default();
        if !self.attached {
            return report;
        }

        let scroll_y = viewport.scroll_y().max(0.0);
        let hit = active_section(&self.registry, viewport, self.config.probe_offset);

        let next = ScrollState {
            scroll_y,
            probe_hit: hit.is_some(),
            // どのセクションにも入らない位置では直前のハイライトを維持する
            active_section_id: hit.or_else(|| self.state.active_section_id.clone()),
            show_scroll_top: scroll_y > self.config.scroll_top_threshold,
            header_scrolled: scroll_y > self.config.header_threshold,
        };
        report.state_changed = next != self.state;
        self.state = next;

        if !self.painted {
            return report;
        }

        let viewport_height = viewport.viewport_height();
        for element_id in self.visibility.watched_ids() {
            let layout = match viewport.measure(&element_id) {
                Ok(layout) => layout,
                Err(_) => {
                    report.skipped.push(element_id);
                    continue;
                }
            };
            let ratio = layout.intersection_ratio(scroll_y, viewport_height);
            match self.visibility.observe(&element_id, ratio) {
                Some(VisibilityChange::Entered) => report.revealed.push(element_id),
                Some(VisibilityChange::Left) => report.hidden.push(element_id),
                None => {}
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::Section;
    use crate::viewport::StaticViewport;

    fn layout() -> StaticViewport {
        StaticViewport::stacked(
            800.0,
            &[
                ("home", 700.0),
                ("about", 600.0),
                ("experience", 900.0),
                ("skills", 800.0),
                ("projects", 1000.0),
                ("research", 900.0),
                ("certifications", 600.0),
                ("contact", 800.0),
            ],
        )
    }

    fn observer() -> ScrollObserver {
        let mut observer = ScrollObserver::new(SectionRegistry::portfolio(), ObserverConfig::default());
        observer.attach();
        observer
    }

    #[test]
    fn test_active_section_uses_probe_offset() {
        let mut viewport = layout();
        viewport.scroll_to(600.0);
        assert_eq!(
            active_section(&SectionRegistry::portfolio(), &viewport, 100.0).as_deref(),
            Some("about")
        );
        viewport.scroll_to(599.5);
        assert_eq!(
            active_section(&SectionRegistry::portfolio(), &viewport, 100.0).as_deref(),
            Some("home")
        );
    }

    #[test]
    fn test_exactly_one_active_for_contiguous_layout() {
        let registry = SectionRegistry::portfolio();
        let mut viewport = layout();
        let total: f64 = 700.0 + 600.0 + 900.0 + 800.0 + 1000.0 + 900.0 + 600.0 + 800.0;
        let mut y = 0.0;
        while y + 100.0 < total {
            viewport.scroll_to(y);
            let matches = registry
                .iter()
                .filter(|s| viewport.boxes[&s.id].contains(y + 100.0))
                .count();
            assert_eq!(matches, 1, "scroll_y = {}", y);
            assert!(active_section(&registry, &viewport, 100.0).is_some());
            y += 37.0;
        }
    }

    #[test]
    fn test_overlap_last_in_registry_wins() {
        let registry = SectionRegistry::new(vec![
            Section::new("a", "A", 0),
            Section::new("b", "B", 1),
        ])
        .unwrap();
        let mut viewport = StaticViewport::new(800.0)
            .with_box("a", 0.0, 1000.0)
            .with_box("b", 0.0, 500.0);
        viewport.scroll_to(0.0);
        assert_eq!(active_section(&registry, &viewport, 100.0).as_deref(), Some("b"));
    }

    #[test]
    fn test_thresholds() {
        let mut observer = observer();
        let mut viewport = layout();

        viewport.scroll_to(50.0);
        observer.tick(&viewport);
        assert!(!observer.state().header_scrolled);
        assert!(!observer.state().show_scroll_top);

        viewport.scroll_to(51.0);
        observer.tick(&viewport);
        assert!(observer.state().header_scrolled);
        assert!(!observer.state().show_scroll_top);

        viewport.scroll_to(501.0);
        observer.tick(&viewport);
        assert!(observer.state().show_scroll_top);

        viewport.scroll_to(0.0);
        observer.tick(&viewport);
        assert!(!observer.state().header_scrolled);
        assert!(!observer.state().show_scroll_top);
    }

    #[test]
    fn test_negative_scroll_clamped() {
        let mut observer = observer();
        let mut viewport = layout();
        viewport.scroll_to(-40.0);
        observer.tick(&viewport);
        assert_eq!(observer.state().scroll_y, 0.0);
        assert_eq!(observer.state().active_section_id.as_deref(), Some("home"));
    }

    #[test]
    fn test_gap_keeps_previous_active() {
        let registry = SectionRegistry::new(vec![
            Section::new("home", "Home", 0),
            Section::new("about", "About", 1),
        ])
        .unwrap();
        let mut observer = ScrollObserver::new(registry, ObserverConfig::default());
        observer.attach();
        let mut viewport = StaticViewport::new(800.0)
            .with_box("home", 0.0, 500.0)
            .with_box("about", 1000.0, 500.0);

        viewport.scroll_to(0.0);
        observer.tick(&viewport);
        assert_eq!(observer.state().active_section_id.as_deref(), Some("home"));

        viewport.scroll_to(600.0);
        observer.tick(&viewport);
        assert!(!observer.state().probe_hit);
        assert_eq!(observer.state().active_section_id.as_deref(), Some("home"));
    }

    #[test]
    fn test_unmounted_section_skipped() {
        let mut observer = observer();
        let mut viewport = layout();
        viewport.remove("about");
        viewport.scroll_to(700.0);
        observer.watch("about", true);
        observer.watch("experience", true);
        observer.mark_painted();

        let report = observer.tick(&viewport);
        assert_eq!(report.skipped, vec!["about".to_string()]);
        // about が計測できないため home のハイライトは付かず、プローブはどこにも当たらない
        assert!(!observer.state().probe_hit);
        assert!(observer.is_visible("experience"));
    }

    #[test]
    fn test_no_visibility_before_first_paint() {
        let mut observer = observer();
        let viewport = layout();
        observer.watch("home", true);

        let report = observer.tick(&viewport);
        assert!(report.revealed.is_empty());
        assert!(!observer.is_visible("home"));

        observer.mark_painted();
        let report = observer.tick(&viewport);
        assert_eq!(report.revealed, vec!["home".to_string()]);
    }

    #[test]
    fn test_entrance_plays_at_most_once() {
        let mut observer = observer();
        let mut viewport = layout();
        observer.watch("projects", true);
        observer.mark_painted();

        let mut reveals = 0;
        for y in [0.0, 2500.0, 3100.0, 0.0, 3100.0, 6000.0, 0.0] {
            viewport.scroll_to(y);
            reveals += observer.tick(&viewport).revealed.len();
            if y >= 3100.0 {
                assert!(observer.is_visible("projects"));
            }
        }
        assert_eq!(reveals, 1);
        assert!(observer.is_visible("projects"));
    }

    #[test]
    fn test_detached_observer_ignores_ticks() {
        let mut observer = observer();
        let mut viewport = layout();
        observer.watch("about", true);
        observer.mark_painted();
        observer.detach();

        viewport.scroll_to(800.0);
        let report = observer.tick(&viewport);
        assert_eq!(report, TickReport::default());
        assert_eq!(observer.state(), &ScrollState::default());
        assert!(!observer.is_visible("about"));
    }

    #[test]
    fn test_state_changed_flag() {
        let mut observer = observer();
        let viewport = layout();
        assert!(observer.tick(&viewport).state_changed);
        assert!(!observer.tick(&viewport).state_changed);
    }
}
