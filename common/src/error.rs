//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[cfg(not(feature = "wasm"))]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// レイアウト計測の失敗
///
/// スクロール処理中に要素がアンマウントされた場合などに発生する。
/// 呼び出し側には伝播させず、そのティックでは該当要素をスキップする。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeasurementError {
    #[error("element not found: {0}")]
    Missing(String),

    #[error("element has no layout box: {0}")]
    Detached(String),
}

/// 送信ゲートウェイのエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("endpoint rejected the message (status {status})")]
    Rejected { status: u16 },

    #[error("failed to encode payload: {0}")]
    Encode(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
