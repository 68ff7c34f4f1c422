//! 職歴セクション

use crate::observer::use_entrance;
use leptos::prelude::*;
use portfolio_common::types::Experience;

#[component]
pub fn Experiences(experiences: Vec<Experience>) -> impl IntoView {
    let entered = use_entrance("experience");

    let items = experiences
        .into_iter()
        .map(|exp| {
            let achievements = exp
                .achievements
                .into_iter()
                .map(|a| view! { <li>{a}</li> })
                .collect_view();
            view! {
                <article class="timeline-item">
                    <header>
                        <h3>{exp.role}</h3>
                        <p class="company">{exp.company}" · "{exp.location}</p>
                        <p class="period">{exp.period}</p>
                    </header>
                    <ul class="achievements">{achievements}</ul>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="section reveal" class:revealed=move || entered.get()>
            <h2 class="section-title">"Experience"</h2>
            <div class="timeline">{items}</div>
        </section>
    }
}
