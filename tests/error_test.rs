//! エラー表示テスト

use portfolio_common::GatewayError;
use portfolio_site::error::SiteError;

/// SiteErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SiteError::Config("テスト設定エラー".to_string()),
        SiteError::FileNotFound("content.json".to_string()),
        SiteError::InvalidLayout("viewportHeight".to_string()),
        SiteError::Prompt("入力中断".to_string()),
        SiteError::Validation("Name is required".to_string()),
        SiteError::Delivery(GatewayError::Rejected { status: 503 }),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラー表示が空: {:?}", err);
    }
}

#[test]
fn test_gateway_error_converts() {
    let err: SiteError = GatewayError::Network("offline".into()).into();
    assert_eq!(err.to_string(), "送信に失敗しました: network error: offline");
}

#[test]
fn test_json_error_converts() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SiteError = parse.into();
    assert!(matches!(err, SiteError::JsonParse(_)));
    assert!(err.to_string().starts_with("JSON解析エラー"));
}
