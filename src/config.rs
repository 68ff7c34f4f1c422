use crate::error::{Result, SiteError};
use portfolio_common::{Portfolio, SiteConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLIの設定（`~/.config/portfolio/config.json`）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// サイトと共通の設定
    pub site: SiteConfig,
    /// コンテンツJSON。未指定なら組み込みデータ
    pub content_path: Option<PathBuf>,
}

impl Config {
    /// 既定の場所から読み込む。ファイルが無ければデフォルト値
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// 指定ファイルから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SiteError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SiteError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio").join("config.json"))
    }

    /// 表示するコンテンツ（引数 > 設定ファイル > 組み込み の順）
    pub fn portfolio(&self, override_path: Option<&Path>) -> Result<Portfolio> {
        match override_path.or(self.content_path.as_deref()) {
            Some(path) => {
                if !path.exists() {
                    return Err(SiteError::FileNotFound(path.display().to_string()));
                }
                Ok(Portfolio::from_file(path)?)
            }
            None => Ok(Portfolio::builtin()),
        }
    }

    fn check(&self) -> Result<()> {
        let threshold = self.site.observer.visibility_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SiteError::Config(format!(
                "visibility_threshold は0.0〜1.0で指定してください: {}",
                threshold
            )));
        }
        if self.site.observer.probe_offset < 0.0 {
            return Err(SiteError::Config("probe_offset は0以上で指定してください".into()));
        }
        Ok(())
    }
}
