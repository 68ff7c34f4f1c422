//! お問い合わせフォーム
//!
//! 入力検証と送信ライフサイクル（Idle → Submitting → Submitted → Idle）。
//! 送信処理そのものは [`crate::gateway`] が担当し、ここでは状態遷移のみを扱う。

use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// メッセージ本文の最小文字数（前後の空白を除く）
pub const MIN_MESSAGE_CHARS: usize = 10;

/// フォームの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

/// 検証エラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationKind {
    Required,
    InvalidFormat,
    TooShort,
}

/// 入力欄ごとの検証エラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", message(*field, *kind))]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
}

/// 入力欄の横に表示するメッセージ
pub fn message(field: Field, kind: ValidationKind) -> String {
    match (field, kind) {
        (_, ValidationKind::Required) => format!("{} is required", field.label()),
        (Field::Email, ValidationKind::InvalidFormat) => "Please enter a valid email".to_string(),
        (_, ValidationKind::InvalidFormat) => format!("{} has an invalid format", field.label()),
        (_, ValidationKind::TooShort) => format!(
            "{} must be at least {} characters",
            field.label(),
            MIN_MESSAGE_CHARS
        ),
    }
}

/// 入力欄→エラー（キーが無ければエラーなし）
pub type FieldErrors = BTreeMap<Field, ValidationKind>;

/// 送信内容
///
/// 将来のメール/APIバックエンドが受け取る形そのもの。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

/// `local@domain.tld` 形式か（`@` は一つ、`@` の後に `.`、空白なし）
pub fn is_valid_email(email: &str) -> bool {
    lazy_static::lazy_static! {
        static ref EMAIL_RE: regex::Regex = regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// 全入力欄を検証し、違反した欄を全て返す
pub fn validate(payload: &ContactPayload) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if payload.name.trim().is_empty() {
        errors.insert(Field::Name, ValidationKind::Required);
    }

    if payload.email.trim().is_empty() {
        errors.insert(Field::Email, ValidationKind::Required);
    } else if !is_valid_email(&payload.email) {
        errors.insert(Field::Email, ValidationKind::InvalidFormat);
    }

    if payload.subject.trim().is_empty() {
        errors.insert(Field::Subject, ValidationKind::Required);
    }

    let message = payload.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, ValidationKind::Required);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(Field::Message, ValidationKind::TooShort);
    }

    errors
}

/// エラー一覧を `ValidationError` の列に変換
pub fn validation_errors(errors: &FieldErrors) -> Vec<ValidationError> {
    errors
        .iter()
        .map(|(&field, &kind)| ValidationError { field, kind })
        .collect()
}

/// 送信ステータス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// 送信先がエラーを返した。入力内容は保持され、再送信できる
    Failed { reason: String },
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Failed { .. } => "failed",
        }
    }
}

/// 送信操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// 検証を通過し、Submittingへ遷移した
    Accepted(ContactPayload),
    /// 検証エラー。ステータスは変わらない
    Rejected(FieldErrors),
    /// 送信中・完了表示中のため無視した
    Ignored,
}

/// 送信開始後に時間経過で届くイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// 送信先からの応答
    Delivered(Result<(), GatewayError>),
    /// 完了表示の時間切れ
    ConfirmationExpired,
}

/// お問い合わせフォームの状態
///
/// マウント時に新規作成し、永続化はしない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactPayload,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactPayload {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// 入力値を更新し、その欄のエラーを消す（ステータスは変えない）
    pub fn set_field(&mut self, field: Field, value: &str) {
        *self.fields.get_mut(field) = value.to_string();
        self.errors.remove(&field);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<ValidationKind> {
        self.errors.get(&field).copied()
    }

    pub fn error_message(&self, field: Field) -> Option<String> {
        self.error(field).map(|kind| message(field, kind))
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// 送信ボタンが押せるか
    pub fn can_submit(&self) -> bool {
        matches!(self.status, SubmissionStatus::Idle | SubmissionStatus::Failed { .. })
    }

    /// 送信操作
    ///
    /// 全欄を検証し、一つでも違反があればエラーを記録してステータスを据え置く。
    /// 全て通ればSubmittingに遷移し、送信内容を返す。
    pub fn submit(&mut self) -> SubmitAttempt {
        if !self.can_submit() {
            return SubmitAttempt::Ignored;
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return SubmitAttempt::Rejected(errors);
        }

        self.errors.clear();
        self.status = SubmissionStatus::Submitting;
        SubmitAttempt::Accepted(self.fields.clone())
    }

    /// 送信結果を反映する。Submitting以外では何もせず `false` を返す
    ///
    /// 成功時は入力欄をクリアしてSubmittedへ、失敗時は入力を残してFailedへ。
    pub fn complete(&mut self, outcome: Result<(), GatewayError>) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.fields = ContactPayload::default();
                self.status = SubmissionStatus::Submitted;
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed {
                    reason: err.to_string(),
                };
            }
        }
        true
    }

    /// 完了表示の終了。Submitted以外では何もせず `false` を返す
    pub fn expire_confirmation(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitted {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// ライフサイクルイベントを反映する
    pub fn apply(&mut self, event: LifecycleEvent) -> bool {
        match event {
            LifecycleEvent::Delivered(outcome) => self.complete(outcome),
            LifecycleEvent::ConfirmationExpired => self.expire_confirmation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str, subject: &str, message: &str) -> ContactPayload {
        ContactPayload {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    fn filled_form(p: &ContactPayload) -> ContactForm {
        let mut form = ContactForm::new();
        for field in Field::ALL {
            form.set_field(field, p.get(field));
        }
        form
    }

    #[test]
    fn test_missing_name_and_short_message() {
        let errors = validate(&payload("", "a@b.com", "hi", "short"));
        let mut expected = FieldErrors::new();
        expected.insert(Field::Name, ValidationKind::Required);
        expected.insert(Field::Message, ValidationKind::TooShort);
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_invalid_email_only() {
        let errors = validate(&payload("Tanish", "bad-email", "Hi", "This is long enough."));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Email), Some(&ValidationKind::InvalidFormat));
    }

    #[test]
    fn test_all_empty_reports_every_field() {
        let errors = validate(&ContactPayload::default());
        assert_eq!(errors.len(), 4);
        assert!(errors.values().all(|k| *k == ValidationKind::Required));
    }

    #[test]
    fn test_whitespace_only_is_required() {
        let errors = validate(&payload("   ", " \t", "\n", "          "));
        assert_eq!(errors.get(&Field::Email), Some(&ValidationKind::Required));
        assert_eq!(errors.get(&Field::Message), Some(&ValidationKind::Required));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_message_length_is_trimmed_chars() {
        assert!(validate(&payload("A", "a@b.com", "S", "1234567890")).is_empty());
        let errors = validate(&payload("A", "a@b.com", "S", "   123456789   "));
        assert_eq!(errors.get(&Field::Message), Some(&ValidationKind::TooShort));
        // マルチバイト文字は文字数で数える
        assert!(validate(&payload("A", "a@b.com", "S", "こんにちは、よろしく")).is_empty());
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(message(Field::Name, ValidationKind::Required), "Name is required");
        assert_eq!(message(Field::Email, ValidationKind::InvalidFormat), "Please enter a valid email");
        assert_eq!(
            message(Field::Message, ValidationKind::TooShort),
            "Message must be at least 10 characters"
        );
        let err = ValidationError { field: Field::Subject, kind: ValidationKind::Required };
        assert_eq!(err.to_string(), "Subject is required");
    }

    #[test]
    fn test_rejected_submit_stays_idle() {
        let mut form = filled_form(&payload("", "a@b.com", "hi", "short"));
        let attempt = form.submit();
        assert!(matches!(attempt, SubmitAttempt::Rejected(ref e) if e.len() == 2));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.error(Field::Name), Some(ValidationKind::Required));
        assert_eq!(form.error_message(Field::Message).as_deref(), Some("Message must be at least 10 characters"));
    }

    #[test]
    fn test_editing_clears_only_that_field_error() {
        let mut form = ContactForm::new();
        form.submit();
        assert_eq!(form.errors().len(), 4);

        form.set_field(Field::Name, "T");
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_accepted_submit_and_completion() {
        let p = payload("A", "a@b.com", "S", "1234567890");
        let mut form = filled_form(&p);

        assert_eq!(form.submit(), SubmitAttempt::Accepted(p.clone()));
        assert_eq!(form.status(), &SubmissionStatus::Submitting);
        assert!(form.errors().is_empty());

        // 送信中の再送信は無視
        assert_eq!(form.submit(), SubmitAttempt::Ignored);
        assert!(!form.can_submit());

        assert!(form.complete(Ok(())));
        assert_eq!(form.status(), &SubmissionStatus::Submitted);
        assert_eq!(form.fields(), &ContactPayload::default());
        assert_eq!(form.submit(), SubmitAttempt::Ignored);

        assert!(form.expire_confirmation());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let p = payload("A", "a@b.com", "S", "1234567890");
        let mut form = filled_form(&p);
        form.submit();
        assert!(form.complete(Err(GatewayError::Rejected { status: 500 })));
        assert!(matches!(form.status(), SubmissionStatus::Failed { reason } if reason.contains("500")));
        assert_eq!(form.fields(), &p);
        assert!(form.can_submit());
        assert!(matches!(form.submit(), SubmitAttempt::Accepted(_)));
    }

    #[test]
    fn test_stale_transitions_ignored() {
        let mut form = ContactForm::new();
        assert!(!form.complete(Ok(())));
        assert!(!form.expire_confirmation());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_payload_json_shape() {
        let json = serde_json::to_value(payload("A", "a@b.com", "S", "1234567890")).unwrap();
        assert_eq!(json["name"], "A");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["subject"], "S");
        assert_eq!(json["message"], "1234567890");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
