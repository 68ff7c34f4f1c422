//! お問い合わせ内容の対話入力

use crate::error::{Result, SiteError};
use dialoguer::Input;
use portfolio_common::contact::message;
use portfolio_common::{ContactForm, Field, FieldErrors};

/// 1項目を入力させる（空入力も受け付け、検証はフォーム側で行う）
pub fn ask_field(field: Field, initial: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(field.label())
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| SiteError::Prompt(e.to_string()))?;
    Ok(input)
}

/// 未入力の項目だけ入力させる
pub fn fill_missing(form: &mut ContactForm) -> Result<()> {
    for field in Field::ALL {
        if form.field(field).is_empty() {
            let value = ask_field(field, "")?;
            form.set_field(field, &value);
        }
    }
    Ok(())
}

/// エラーのある項目を再入力させる
pub fn fix_errors(form: &mut ContactForm, errors: &FieldErrors) -> Result<()> {
    for (&field, &kind) in errors {
        println!("  ✗ {}", message(field, kind));
        let current = form.field(field).to_string();
        let value = ask_field(field, &current)?;
        form.set_field(field, &value);
    }
    Ok(())
}
