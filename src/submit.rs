//! フォーム送信の進行（検証 → 送信 → 完了表示 → 初期状態）

use crate::error::{Result, SiteError};
use portfolio_common::contact::validation_errors;
use portfolio_common::{
    run_submission, ContactForm, FieldErrors, GatewayError, LifecycleEvent, Sleeper,
    SubmissionStatus, SubmitAttempt, SubmitGateway,
};
use std::time::Duration;

/// 検証エラーを1行にまとめる
pub fn summarize(errors: &FieldErrors) -> String {
    validation_errors(errors)
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// フォームを送信し、ステータスが変わるたびに `on_status` を呼ぶ
///
/// 検証エラーは `Validation`、送信先の失敗は `Delivery` として返す。
/// 失敗してもフォームの入力内容は残る。
pub async fn deliver_form<G, S, F>(
    form: &mut ContactForm,
    gateway: &G,
    sleeper: &S,
    confirmation: Duration,
    mut on_status: F,
) -> Result<()>
where
    G: SubmitGateway + ?Sized,
    S: Sleeper + ?Sized,
    F: FnMut(&SubmissionStatus),
{
    let payload = match form.submit() {
        SubmitAttempt::Accepted(payload) => payload,
        SubmitAttempt::Rejected(errors) => return Err(SiteError::Validation(summarize(&errors))),
        SubmitAttempt::Ignored => {
            return Err(SiteError::Validation("送信中のため受け付けられません".into()))
        }
    };
    on_status(form.status());

    let mut failure: Option<GatewayError> = None;
    run_submission(gateway, sleeper, confirmation, payload, |event| {
        if let LifecycleEvent::Delivered(Err(err)) = &event {
            failure = Some(err.clone());
        }
        if form.apply(event) {
            on_status(form.status());
        }
    })
    .await;

    match failure {
        Some(err) => Err(SiteError::Delivery(err)),
        None => Ok(()),
    }
}
