//! コンテンツフィルタ
//!
//! 固定リストを表示用の部分集合に絞り込む純粋関数群。
//! - プロジェクト: カテゴリ選択
//! - 研究論文: タグ選択 + 全文検索（AND条件）
//!
//! 出力は入力順を保持し、同じ入力には常に同じ結果を返す。
//! 結果が空でもエラーではない（呼び出し側で「該当なし」を表示する）。

use crate::types::{Project, ResearchPaper};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// カテゴリ選択肢「すべて」の表示値
pub const ALL_CATEGORIES: &str = "all";

/// フィルタ対象の要素
pub trait FilterableItem {
    /// 所属カテゴリ
    fn category(&self) -> Option<&str> {
        None
    }

    /// タグ
    fn tags(&self) -> &[String] {
        &[]
    }

    /// 全文検索の対象フィールド
    fn search_fields(&self) -> Vec<&str>;
}

impl FilterableItem for Project {
    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl FilterableItem for ResearchPaper {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.summary.as_str(), self.journal.as_str()]
    }
}

/// カテゴリ選択
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// 選択肢の表示値から変換（`"all"` は全件）
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL_CATEGORIES {
            Category::All
        } else {
            Category::Named(choice.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => ALL_CATEGORIES,
            Category::Named(name) => name.as_str(),
        }
    }
}

/// フィルタ状態
///
/// ユーザー操作（カテゴリ・タグのクリック、検索入力）でのみ変化する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub selected_category: Category,
    pub search_query: String,
    pub active_tag: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_category(&mut self, choice: &str) {
        self.selected_category = Category::from_choice(choice);
    }

    pub fn set_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// タグを単一選択でトグルする（選択中のタグを再度押すと解除）
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.active_tag.as_deref() == Some(tag) {
            self.active_tag = None;
        } else {
            self.active_tag = Some(tag.to_string());
        }
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tag.as_deref() == Some(tag)
    }

    pub fn is_category_selected(&self, choice: &str) -> bool {
        self.selected_category.as_str() == choice
    }

    /// 絞り込み条件が一つもないか
    pub fn is_unfiltered(&self) -> bool {
        self.selected_category == Category::All
            && self.search_query.is_empty()
            && self.active_tag.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn matches_category<T: FilterableItem>(item: &T, state: &FilterState) -> bool {
    match &state.selected_category {
        Category::All => true,
        Category::Named(name) => item.category() == Some(name.as_str()),
    }
}

pub fn matches_tag<T: FilterableItem>(item: &T, state: &FilterState) -> bool {
    match &state.active_tag {
        None => true,
        Some(tag) => item.tags().iter().any(|t| t == tag),
    }
}

/// 大文字小文字を区別しない部分一致
pub fn matches_query<T: FilterableItem>(item: &T, state: &FilterState) -> bool {
    if state.search_query.is_empty() {
        return true;
    }
    let needle = state.search_query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// 全条件（カテゴリ・タグ・検索）のANDで絞り込む
pub fn filter<T: FilterableItem + Clone>(items: &[T], state: &FilterState) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_category(*item, state))
        .filter(|item| matches_tag(*item, state))
        .filter(|item| matches_query(*item, state))
        .cloned()
        .collect()
}

/// カテゴリのみで絞り込む（プロジェクト一覧）
pub fn filter_by_category<T: FilterableItem + Clone>(items: &[T], state: &FilterState) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_category(*item, state))
        .cloned()
        .collect()
}

/// タグと検索語で絞り込む（研究論文一覧）
pub fn filter_by_tag_and_query<T: FilterableItem + Clone>(items: &[T], state: &FilterState) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_tag(*item, state) && matches_query(*item, state))
        .cloned()
        .collect()
}

/// カテゴリ選択肢: 先頭に `"all"`、以降は初出順の重複なし
pub fn category_choices<T: FilterableItem>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut choices = vec![ALL_CATEGORIES.to_string()];
    for category in items.iter().filter_map(|item| item.category()) {
        if seen.insert(category) {
            choices.push(category.to_string());
        }
    }
    choices
}

/// タグ選択肢: 初出順の重複なし
pub fn tag_choices<T: FilterableItem>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|item| item.tags().iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}
