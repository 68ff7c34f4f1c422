//! ブラウザのウィンドウを `ViewportProvider` として扱う

use portfolio_common::{LayoutBox, MeasurementError, ViewportProvider};

/// 現在のウィンドウとDOMから位置を測る
pub struct WindowViewport {
    window: web_sys::Window,
}

impl WindowViewport {
    /// ウィンドウが無い環境（ワーカー等）では `None`
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ViewportProvider for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn measure(&self, element_id: &str) -> Result<LayoutBox, MeasurementError> {
        let document = self
            .window
            .document()
            .ok_or_else(|| MeasurementError::Detached(element_id.to_string()))?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| MeasurementError::Missing(element_id.to_string()))?;

        // 文書先頭からの位置に直す
        let rect = element.get_bounding_client_rect();
        Ok(LayoutBox::new(rect.top() + self.scroll_y(), rect.height()))
    }
}
