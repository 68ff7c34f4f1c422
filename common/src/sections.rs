//! セクションレジストリ
//!
//! ページ上のアンカー付きセクションを定義順に保持する。
//! ナビゲーションのリンク描画とスクロール監視の候補リストの両方が参照する。
//! 実行時に変更するAPIは持たない。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// ページ内セクション
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// アンカーのid（`#about` の `about`）
    pub id: String,
    /// ナビゲーションに表示するラベル
    pub label: String,
    /// 表示順
    pub order: u32,
}

impl Section {
    pub fn new(id: &str, label: &str, order: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            order,
        }
    }

    /// ナビゲーションリンクのhref
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// 順序付き・不変のセクション一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// セクション一覧から構築
    ///
    /// idの重複・空文字はエラー。`order` の昇順に並べ替える（同値は入力順を維持）。
    pub fn new(mut sections: Vec<Section>) -> Result<Self> {
        let mut seen = HashSet::new();
        for section in &sections {
            if section.id.trim().is_empty() {
                return Err(Error::Config("section id must not be empty".into()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(Error::Config(format!("duplicate section id: {}", section.id)));
            }
        }
        sections.sort_by_key(|s| s.order);
        Ok(Self { sections })
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let sections: Vec<Section> = serde_json::from_str(json)?;
        Self::new(sections)
    }

    /// サイトの既定セクション
    pub fn portfolio() -> Self {
        let sections = [
            ("home", "Home"),
            ("about", "About"),
            ("experience", "Experience"),
            ("skills", "Skills"),
            ("projects", "Projects"),
            ("research", "Research"),
            ("certifications", "Certifications"),
            ("contact", "Contact"),
        ]
        .iter()
        .enumerate()
        .map(|(i, (id, label))| Section::new(id, label, i as u32))
        .collect();

        Self { sections }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// ナビゲーションに並ぶ表示名（定義順）
    pub fn labels(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::portfolio()
    }
}
