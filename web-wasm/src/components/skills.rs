//! スキルセクション

use crate::observer::use_entrance;
use leptos::prelude::*;
use portfolio_common::types::SkillCategory;

#[component]
pub fn Skills(skills: Vec<SkillCategory>) -> impl IntoView {
    let entered = use_entrance("skills");

    let categories = skills
        .into_iter()
        .map(|category| {
            let items = category
                .items
                .into_iter()
                .map(|item| view! { <span class="skill-tag">{item}</span> })
                .collect_view();
            view! {
                <div class="skill-card">
                    <h3>{category.title}</h3>
                    <div class="skill-items">{items}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="section reveal" class:revealed=move || entered.get()>
            <h2 class="section-title">"Skills"</h2>
            <div class="skill-grid">{categories}</div>
        </section>
    }
}
