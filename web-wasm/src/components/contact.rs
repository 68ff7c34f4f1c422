//! お問い合わせセクション

use crate::api::submit::{gateway_for, GlooSleeper};
use crate::observer::use_entrance;
use futures::future::{AbortHandle, Abortable};
use gloo::console::{error, log};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{
    run_submission, ContactChannel, ContactConfig, ContactForm, Field, SubmissionStatus,
    SubmitAttempt,
};

#[component]
pub fn Contact(channels: Vec<ContactChannel>, config: ContactConfig) -> impl IntoView {
    let entered = use_entrance("contact");
    let (form, set_form) = signal(ContactForm::new());
    let pending = StoredValue::new(None::<AbortHandle>);

    // アンマウント後に送信結果が届いても反映しない
    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.abort();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut attempt = SubmitAttempt::Ignored;
        set_form.update(|f| attempt = f.submit());
        let payload = match attempt {
            SubmitAttempt::Accepted(payload) => payload,
            SubmitAttempt::Rejected(errors) => {
                log!(format!("contact form rejected: {} field(s)", errors.len()));
                return;
            }
            SubmitAttempt::Ignored => return,
        };

        log!("contact submission started");
        let (handle, registration) = AbortHandle::new_pair();
        pending.set_value(Some(handle));

        let gateway = gateway_for(&config);
        let confirmation = config.confirmation();
        spawn_local(async move {
            let run = run_submission(
                gateway.as_ref(),
                &GlooSleeper,
                confirmation,
                payload,
                move |event| {
                    set_form.update(|f| {
                        f.apply(event);
                    });
                    if let SubmissionStatus::Failed { reason } = form.get_untracked().status() {
                        error!(format!("contact submission failed: {}", reason));
                    }
                },
            );
            match Abortable::new(run, registration).await {
                Ok(()) => log!("contact submission finished"),
                Err(_) => log!("contact submission cancelled"),
            }
        });
    };

    let channel_cards = channels
        .into_iter()
        .map(|channel| {
            view! {
                <a class="contact-channel" href=channel.link>
                    <h3>{channel.title}</h3>
                    <p>{channel.value}</p>
                </a>
            }
        })
        .collect_view();

    let status = move || form.with(|f| f.status().clone());
    let submitting = move || matches!(status(), SubmissionStatus::Submitting);
    let submitted = move || matches!(status(), SubmissionStatus::Submitted);

    view! {
        <section id="contact" class="section reveal" class:revealed=move || entered.get()>
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="contact-layout">
                <div class="contact-channels">{channel_cards}</div>
                {move || {
                    submitted().then(|| {
                        view! {
                            <div class="contact-success" role="status">
                                <h3>"Thank you!"</h3>
                                <p>"Your message has been sent. I'll get back to you soon."</p>
                            </div>
                        }
                    })
                }}
                <form
                    class="contact-form"
                    novalidate=true
                    prop:hidden=submitted
                    on:submit=on_submit
                >
                    <FormField field=Field::Name form=form set_form=set_form />
                    <FormField field=Field::Email form=form set_form=set_form />
                    <FormField field=Field::Subject form=form set_form=set_form />
                    <FormField field=Field::Message form=form set_form=set_form multiline=true />
                    {move || match status() {
                        SubmissionStatus::Failed { reason } => Some(view! {
                            <p class="form-error" role="alert">
                                "Sending failed (" {reason} "). Please try again."
                            </p>
                        }),
                        _ => None,
                    }}
                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || if submitting() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    field: Field,
    form: ReadSignal<ContactForm>,
    set_form: WriteSignal<ContactForm>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());
    let message = move || form.with(|f| f.error_message(field));
    let has_error = move || form.with(|f| f.error(field).is_some());

    let input = if multiline {
        view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows="5"
                class:invalid=has_error
                prop:value=value
                on:input=move |ev| set_form.update(|f| f.set_field(field, &event_target_value(&ev)))
            ></textarea>
        }
        .into_any()
    } else {
        let kind = if field == Field::Email { "email" } else { "text" };
        view! {
            <input
                id=field.as_str()
                name=field.as_str()
                type=kind
                class:invalid=has_error
                prop:value=value
                on:input=move |ev| set_form.update(|f| f.set_field(field, &event_target_value(&ev)))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.as_str()>{field.label()}</label>
            {input}
            {move || message().map(|m| view! { <span class="field-error">{m}</span> })}
        </div>
    }
}
