//! ナビゲーションメニューと詳細ダイアログの開閉状態

use crate::types::ResearchPaper;

/// ナビゲーションメニュー
///
/// コンテナ幅がブレークポイント未満ならモバイル表示（ハンバーガー）。
#[derive(Debug, Clone, PartialEq)]
pub struct NavMenu {
    breakpoint: f64,
    is_mobile: bool,
    is_open: bool,
}

impl NavMenu {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            breakpoint,
            is_mobile: false,
            is_open: false,
        }
    }

    /// コンテナ幅の変化を反映する。デスクトップ表示に戻ったらメニューを閉じる
    pub fn resize(&mut self, width: f64) {
        self.is_mobile = width < self.breakpoint;
        if !self.is_mobile {
            self.is_open = false;
        }
    }

    /// ハンバーガーボタン。デスクトップ表示では何もしない
    pub fn toggle(&mut self) {
        if self.is_mobile {
            self.is_open = !self.is_open;
        }
    }

    /// リンクを選んだらメニューを閉じる
    pub fn navigate(&mut self) {
        self.is_open = false;
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

/// 論文の概要ダイアログ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperDetail {
    selected: Option<u32>,
}

impl PaperDetail {
    pub fn open(&mut self, paper_id: u32) {
        self.selected = Some(paper_id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    /// 選択中の論文。一覧に存在しないidなら `None`
    pub fn selected<'a>(&self, papers: &'a [ResearchPaper]) -> Option<&'a ResearchPaper> {
        let id = self.selected?;
        papers.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_only_on_mobile() {
        let mut menu = NavMenu::new(768.0);
        menu.resize(1024.0);
        menu.toggle();
        assert!(!menu.is_open());

        menu.resize(767.0);
        assert!(menu.is_mobile());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_breakpoint_is_exclusive() {
        let mut menu = NavMenu::new(768.0);
        menu.resize(768.0);
        assert!(!menu.is_mobile());
    }

    #[test]
    fn test_menu_closes_when_leaving_mobile() {
        let mut menu = NavMenu::new(768.0);
        menu.resize(400.0);
        menu.toggle();
        menu.resize(1200.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_closes_on_navigate() {
        let mut menu = NavMenu::new(768.0);
        menu.resize(400.0);
        menu.toggle();
        menu.navigate();
        assert!(!menu.is_open());
        assert!(menu.is_mobile());
    }

    #[test]
    fn test_paper_detail() {
        let papers = vec![
            ResearchPaper { id: 1, title: "A".into(), ..Default::default() },
            ResearchPaper { id: 2, title: "B".into(), ..Default::default() },
        ];
        let mut detail = PaperDetail::default();
        assert!(detail.selected(&papers).is_none());

        detail.open(2);
        assert!(detail.is_open());
        assert_eq!(detail.selected(&papers).unwrap().title, "B");

        detail.open(9);
        assert!(detail.is_open());
        assert!(detail.selected(&papers).is_none());

        detail.close();
        assert_eq!(detail.selected_id(), None);
    }
}
