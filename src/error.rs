use portfolio_common::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("レイアウトが不正: {0}")]
    InvalidLayout(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("入力内容に誤りがあります: {0}")]
    Validation(String),

    #[error("送信に失敗しました: {0}")]
    Delivery(#[from] GatewayError),

    #[error("データ読み込みエラー: {0}")]
    Content(#[from] portfolio_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
