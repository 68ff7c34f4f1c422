//! 登場アニメーションの可視ラッチ
//!
//! 要素ID→可視状態のアリーナ。`trigger_once` の要素は一度可視になったら
//! 二度と非可視に戻らず、監視も解除される。

use serde::Serialize;
use std::collections::HashMap;

/// 要素ごとの可視記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRecord {
    pub element_id: String,
    /// 一度でも閾値を超えて可視になったか（単調: false→trueのみ）
    pub has_been_visible: bool,
    pub trigger_once: bool,
    /// 直近の判定で可視か（`trigger_once` でない要素のみ変化する）
    in_view: bool,
    /// 監視中か
    watching: bool,
}

impl VisibilityRecord {
    fn new(element_id: &str, trigger_once: bool) -> Self {
        Self {
            element_id: element_id.to_string(),
            has_been_visible: false,
            trigger_once,
            in_view: false,
            watching: true,
        }
    }

    /// 描画側が参照する可視状態
    pub fn is_visible(&self) -> bool {
        if self.trigger_once {
            self.has_been_visible
        } else {
            self.in_view
        }
    }

    pub fn is_watching(&self) -> bool {
        self.watching
    }
}

/// 可視状態の変化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Entered,
    Left,
}

/// 可視ラッチのアリーナ
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    threshold: f64,
    records: Vec<VisibilityRecord>,
    index: HashMap<String, usize>,
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// 要素を登録
    ///
    /// 登録済みの要素は既存のラッチを保持したまま再度監視対象にする
    /// （ラッチ済みの `trigger_once` 要素は監視に戻さない）。
    pub fn register(&mut self, element_id: &str, trigger_once: bool) {
        if let Some(&i) = self.index.get(element_id) {
            let record = &mut self.records[i];
            if !(record.trigger_once && record.has_been_visible) {
                record.watching = true;
            }
            return;
        }
        self.index.insert(element_id.to_string(), self.records.len());
        self.records.push(VisibilityRecord::new(element_id, trigger_once));
    }

    /// 監視を解除（ラッチ状態は残す）
    pub fn unregister(&mut self, element_id: &str) {
        if let Some(&i) = self.index.get(element_id) {
            self.records[i].watching = false;
        }
    }

    /// 全要素の監視を解除
    pub fn unregister_all(&mut self) {
        for record in &mut self.records {
            record.watching = false;
        }
    }

    /// 交差率を反映する
    ///
    /// 監視していない要素や未登録の要素は無視する。
    pub fn observe(&mut self, element_id: &str, ratio: f64) -> Option<VisibilityChange> {
        let &i = self.index.get(element_id)?;
        let record = &mut self.records[i];
        if !record.watching {
            return None;
        }

        let crossed = ratio > 0.0 && ratio >= self.threshold;
        let was_visible = record.is_visible();

        if crossed {
            record.has_been_visible = true;
        }
        record.in_view = crossed;
        if record.trigger_once && record.has_been_visible {
            record.watching = false;
        }

        match (was_visible, record.is_visible()) {
            (false, true) => Some(VisibilityChange::Entered),
            (true, false) => Some(VisibilityChange::Left),
            _ => None,
        }
    }

    pub fn is_visible(&self, element_id: &str) -> bool {
        self.get(element_id).map(|r| r.is_visible()).unwrap_or(false)
    }

    pub fn get(&self, element_id: &str) -> Option<&VisibilityRecord> {
        self.index.get(element_id).map(|&i| &self.records[i])
    }

    /// 監視中の要素ID（登録順）
    pub fn watched_ids(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.watching)
            .map(|r| r.element_id.clone())
            .collect()
    }

    pub fn records(&self) -> &[VisibilityRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_flips_once_and_stays() {
        let mut tracker = VisibilityTracker::new(0.1);
        tracker.register("about", true);
        assert!(!tracker.is_visible("about"));

        assert_eq!(tracker.observe("about", 0.05), None);
        assert!(!tracker.is_visible("about"));

        assert_eq!(tracker.observe("about", 0.1), Some(VisibilityChange::Entered));
        assert!(tracker.is_visible("about"));

        // スクロールで画面外に戻っても可視のまま
        assert_eq!(tracker.observe("about", 0.0), None);
        assert!(tracker.is_visible("about"));
        assert!(tracker.get("about").unwrap().has_been_visible);
    }

    #[test]
    fn test_trigger_once_deregisters_after_latch() {
        let mut tracker = VisibilityTracker::new(0.1);
        tracker.register("skills", true);
        tracker.register("projects", true);
        tracker.observe("skills", 0.5);
        assert_eq!(tracker.watched_ids(), vec!["projects".to_string()]);
        assert!(!tracker.get("skills").unwrap().is_watching());
    }

    #[test]
    fn test_re_register_keeps_latch() {
        let mut tracker = VisibilityTracker::new(0.1);
        tracker.register("skills", true);
        tracker.observe("skills", 0.5);
        tracker.register("skills", true);
        assert!(tracker.is_visible("skills"));
        assert!(tracker.watched_ids().is_empty());
    }

    #[test]
    fn test_repeating_element_reevaluates() {
        let mut tracker = VisibilityTracker::new(0.1);
        tracker.register("badge", false);
        assert_eq!(tracker.observe("badge", 0.3), Some(VisibilityChange::Entered));
        assert_eq!(tracker.observe("badge", 0.0), Some(VisibilityChange::Left));
        assert!(!tracker.is_visible("badge"));
        // 非可視に戻ってもhas_been_visibleは維持される
        assert!(tracker.get("badge").unwrap().has_been_visible);
        assert!(tracker.get("badge").unwrap().is_watching());
    }

    #[test]
    fn test_unregistered_element_ignored() {
        let mut tracker = VisibilityTracker::new(0.1);
        assert_eq!(tracker.observe("ghost", 1.0), None);
        assert!(!tracker.is_visible("ghost"));
    }

    #[test]
    fn test_unregister_stops_observation() {
        let mut tracker = VisibilityTracker::new(0.1);
        tracker.register("contact", true);
        tracker.unregister("contact");
        assert_eq!(tracker.observe("contact", 1.0), None);
        assert!(!tracker.is_visible("contact"));
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        let mut tracker = VisibilityTracker::new(0.0);
        tracker.register("hero", true);
        assert_eq!(tracker.observe("hero", 0.0), None);
        assert_eq!(tracker.observe("hero", 0.01), Some(VisibilityChange::Entered));
    }
}
