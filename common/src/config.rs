//! サイト設定
//!
//! スクロール判定の閾値やフォーム送信のタイミングなど、
//! 調整が必要になり得る定数をまとめて保持する。全項目にデフォルト値がある。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// スクロール監視の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// アクティブセクション判定時にscrollYへ加算する先読みオフセット(px)
    pub probe_offset: f64,
    /// 「トップへ戻る」ボタンを表示するスクロール量(px)
    pub scroll_top_threshold: f64,
    /// ヘッダーをコンパクト表示にするスクロール量(px)
    pub header_threshold: f64,
    /// 要素が可視とみなされる面積比 (0.0-1.0)
    pub visibility_threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            probe_offset: 100.0,
            scroll_top_threshold: 500.0,
            header_threshold: 50.0,
            visibility_threshold: 0.1,
        }
    }
}

/// ナビゲーションメニューの設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// この幅未満でモバイル表示に切り替える(px)
    pub mobile_breakpoint: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { mobile_breakpoint: 768.0 }
    }
}

/// お問い合わせフォームの設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// 疑似送信の待ち時間(ms)
    pub latency_ms: u64,
    /// 送信完了メッセージの表示時間(ms)
    pub confirmation_ms: u64,
    /// 送信先エンドポイント。未設定なら疑似送信
    pub endpoint: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            confirmation_ms: 5000,
            endpoint: None,
        }
    }
}

impl ContactConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn confirmation(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

/// サイト全体の設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub observer: ObserverConfig,
    pub menu: MenuConfig,
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.observer.probe_offset, 100.0);
        assert_eq!(config.observer.scroll_top_threshold, 500.0);
        assert_eq!(config.observer.header_threshold, 50.0);
        assert_eq!(config.observer.visibility_threshold, 0.1);
        assert_eq!(config.menu.mobile_breakpoint, 768.0);
        assert_eq!(config.contact.latency(), Duration::from_millis(1500));
        assert_eq!(config.contact.confirmation(), Duration::from_secs(5));
        assert!(config.contact.endpoint.is_none());
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"observer": {"probe_offset": 80.0}, "contact": {"latency_ms": 10}}"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.observer.probe_offset, 80.0);
        assert_eq!(config.observer.header_threshold, 50.0);
        assert_eq!(config.contact.latency_ms, 10);
        assert_eq!(config.contact.confirmation_ms, 5000);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(SiteConfig::from_json("{").is_err());
    }
}
