//! 送信ゲートウェイ
//!
//! お問い合わせ内容の送信先を差し替え可能にする。
//! - `SimulatedGateway`: 一定時間待って成功を返す（実際の送信は行わない）
//! - ブラウザの `fetch` 実装はweb側、reqwest実装はCLI側にある
//!
//! 待機は `Sleeper` 経由で行い、テストでは実時間を待たずに進められる。

use crate::contact::{ContactPayload, LifecycleEvent};
use crate::error::GatewayError;
use futures::future::LocalBoxFuture;
use std::time::Duration;

/// 送信先
pub trait SubmitGateway {
    fn deliver(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), GatewayError>>;
}

/// 非同期の待機
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// 一定時間後に成功を返す疑似送信
#[derive(Debug, Clone)]
pub struct SimulatedGateway<S> {
    sleeper: S,
    latency: Duration,
}

impl<S: Sleeper> SimulatedGateway<S> {
    pub fn new(sleeper: S, latency: Duration) -> Self {
        Self { sleeper, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl<S: Sleeper> SubmitGateway for SimulatedGateway<S> {
    fn deliver(&self, _payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), GatewayError>> {
        let wait = self.sleeper.sleep(self.latency);
        Box::pin(async move {
            wait.await;
            Ok(())
        })
    }
}

/// 送信から完了表示の終了までを進める
///
/// 送信結果を `Delivered` で通知し、成功した場合は `confirmation` 経過後に
/// `ConfirmationExpired` を通知する。フォームへの反映は呼び出し側で行う
/// （`ContactForm::apply`）。このfutureをドロップすれば以降の通知は止まる。
pub async fn run_submission<G, S, F>(
    gateway: &G,
    sleeper: &S,
    confirmation: Duration,
    payload: ContactPayload,
    mut on_event: F,
) where
    G: SubmitGateway + ?Sized,
    S: Sleeper + ?Sized,
    F: FnMut(LifecycleEvent),
{
    let outcome = gateway.deliver(payload).await;
    let delivered = outcome.is_ok();
    on_event(LifecycleEvent::Delivered(outcome));

    if delivered {
        sleeper.sleep(confirmation).await;
        on_event(LifecycleEvent::ConfirmationExpired);
    }
}
