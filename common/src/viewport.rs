//! ビューポート抽象
//!
//! `window` / `document` のスクロール位置とレイアウト計測を差し替え可能にする。
//! ブラウザ実装はweb側、テストとCLIは `StaticViewport` を使う。

use crate::error::MeasurementError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 要素の縦方向レイアウト（ドキュメント座標）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub top: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// `top <= y < bottom`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }

    /// ビューポート `[scroll_y, scroll_y + viewport_height)` と重なっている割合
    pub fn intersection_ratio(&self, scroll_y: f64, viewport_height: f64) -> f64 {
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height.max(0.0);

        if self.height <= 0.0 {
            // 高さ0の要素は位置がビューポート内なら全体が見えているとみなす
            return if self.top >= view_top && self.top <= view_bottom { 1.0 } else { 0.0 };
        }

        let overlap = self.bottom().min(view_bottom) - self.top.max(view_top);
        (overlap.max(0.0) / self.height).min(1.0)
    }
}

/// スクロール位置とレイアウト計測の提供元
pub trait ViewportProvider {
    /// 現在のスクロール量(px)
    fn scroll_y(&self) -> f64;

    /// ビューポートの高さ(px)
    fn viewport_height(&self) -> f64;

    /// 要素のレイアウトを計測
    fn measure(&self, element_id: &str) -> Result<LayoutBox, MeasurementError>;
}

/// 固定レイアウトのビューポート
///
/// テストでの合成スクロールイベントや、CLIのレイアウトファイルに使う。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaticViewport {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub boxes: HashMap<String, LayoutBox>,
}

impl StaticViewport {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            ..Default::default()
        }
    }

    pub fn with_box(mut self, id: &str, top: f64, height: f64) -> Self {
        self.boxes.insert(id.to_string(), LayoutBox::new(top, height));
        self
    }

    /// 上から順に高さを積み上げてセクションを配置
    pub fn stacked(viewport_height: f64, sections: &[(&str, f64)]) -> Self {
        let mut viewport = Self::new(viewport_height);
        let mut top = 0.0;
        for (id, height) in sections {
            viewport.boxes.insert(id.to_string(), LayoutBox::new(top, *height));
            top += height;
        }
        viewport
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// 要素を取り除く（アンマウント相当）
    pub fn remove(&mut self, id: &str) {
        self.boxes.remove(id);
    }
}

impl ViewportProvider for StaticViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn measure(&self, element_id: &str) -> Result<LayoutBox, MeasurementError> {
        self.boxes
            .get(element_id)
            .copied()
            .ok_or_else(|| MeasurementError::Missing(element_id.to_string()))
    }
}
