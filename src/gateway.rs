//! CLI用の送信ゲートウェイ

use futures::future::LocalBoxFuture;
use portfolio_common::{
    ContactConfig, ContactPayload, GatewayError, SimulatedGateway, Sleeper, SubmitGateway,
};
use std::time::Duration;

/// tokioのタイマーで待つ
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// JSONをPOSTする送信先
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SubmitGateway for HttpGateway {
    fn deliver(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), GatewayError>> {
        let request = self.client.post(&self.endpoint).json(&payload);
        Box::pin(async move {
            let response = request
                .send()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(GatewayError::Rejected {
                    status: status.as_u16(),
                });
            }
            Ok(())
        })
    }
}

/// HTTP送信のタイムアウト
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// 設定に応じた送信先（エンドポイントが無ければ疑似送信）
pub fn gateway_for(config: &ContactConfig) -> Result<Box<dyn SubmitGateway>, GatewayError> {
    match config.endpoint.as_deref() {
        Some(endpoint) if !endpoint.trim().is_empty() => {
            Ok(Box::new(HttpGateway::new(endpoint, HTTP_TIMEOUT)?))
        }
        _ => Ok(Box::new(SimulatedGateway::new(TokioSleeper, config.latency()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokio_sleeper_waits() {
        let start = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_simulated_when_no_endpoint() {
        let config = ContactConfig {
            latency_ms: 0,
            ..Default::default()
        };
        let gateway = gateway_for(&config).unwrap();
        assert_eq!(gateway.deliver(ContactPayload::default()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // ポートを確保してすぐ閉じ、接続拒否を起こす
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpGateway::new(format!("http://{}/contact", addr), Duration::from_secs(5)).unwrap();
        let result = gateway.deliver(ContactPayload::default()).await;
        assert!(matches!(result, Err(GatewayError::Network(_))));
    }
}
