//! 資格セクション

use crate::observer::use_entrance;
use leptos::prelude::*;
use portfolio_common::types::Certification;

#[component]
pub fn Certifications(certifications: Vec<Certification>) -> impl IntoView {
    let entered = use_entrance("certifications");

    let cards = certifications
        .into_iter()
        .map(|cert| {
            let validity = match cert.expiry_date {
                Some(expiry) => format!("{} – {}", cert.issue_date, expiry),
                None => format!("Issued {}", cert.issue_date),
            };
            view! {
                <article class="cert-card">
                    <h3>{cert.title}</h3>
                    <p class="issuer">{cert.issuer}</p>
                    <p class="validity">{validity}</p>
                    {cert.credential_id.map(|id| view! { <p class="credential-id">"Credential ID: "{id}</p> })}
                    <a href=cert.credential_url target="_blank" rel="noopener noreferrer">
                        "Show credential"
                    </a>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="certifications" class="section reveal" class:revealed=move || entered.get()>
            <h2 class="section-title">"Certifications"</h2>
            <div class="cert-grid">{cards}</div>
        </section>
    }
}
