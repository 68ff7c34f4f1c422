//! 自己紹介セクション

use crate::observer::use_entrance;
use leptos::prelude::*;
use portfolio_common::types::Profile;

#[component]
pub fn About(profile: Profile) -> impl IntoView {
    let entered = use_entrance("about");

    let paragraphs = profile
        .about
        .into_iter()
        .map(|text| view! { <p>{text}</p> })
        .collect_view();
    let stats = profile
        .stats
        .into_iter()
        .map(|stat| {
            view! {
                <div class="stat">
                    <span class="stat-value">{stat.value}</span>
                    <span class="stat-label">{stat.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section reveal" class:revealed=move || entered.get()>
            <h2 class="section-title">"About Me"</h2>
            <p class="lead">{profile.summary}</p>
            <div class="about-text">{paragraphs}</div>
            <div class="stats">{stats}</div>
        </section>
    }
}
