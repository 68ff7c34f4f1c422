//! プロジェクトセクション（カテゴリ絞り込み）

use crate::observer::use_entrance;
use leptos::prelude::*;
use portfolio_common::filter::{category_choices, filter_by_category};
use portfolio_common::{FilterState, Project};

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    let entered = use_entrance("projects");
    let (filter, set_filter) = signal(FilterState::new());

    let buttons = category_choices(&projects)
        .into_iter()
        .map(|choice| {
            let selected = choice.clone();
            let clicked = choice.clone();
            view! {
                <button
                    class="filter-btn"
                    class:active=move || filter.with(|f| f.is_category_selected(&selected))
                    on:click=move |_| set_filter.update(|f| f.select_category(&clicked))
                >
                    {choice}
                </button>
            }
        })
        .collect_view();

    let visible = Signal::derive(move || filter.with(|f| filter_by_category(&projects, f)));

    view! {
        <section id="projects" class="section reveal" class:revealed=move || entered.get()>
            <h2 class="section-title">"Projects"</h2>
            <div class="filters">{buttons}</div>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p>"No projects to show."</p>
                            <button class="btn btn-outline" on:click=move |_| set_filter.update(|f| f.clear())>
                                "Show all projects"
                            </button>
                        </div>
                    }
                }
            >
                <div class="project-grid">
                    <For
                        each=move || visible.get()
                        key=|project| project.id
                        children=|project| view! { <ProjectCard project=project /> }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let technologies = project
        .technologies
        .into_iter()
        .map(|tech| view! { <span class="tech-tag">{tech}</span> })
        .collect_view();

    view! {
        <article class="project-card">
            <img src=project.image alt=project.title.clone() loading="lazy" />
            <div class="project-body">
                <span class="project-category">{project.category}</span>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tech-list">{technologies}</div>
                <div class="project-links">
                    <a href=project.links.demo target="_blank" rel="noopener noreferrer">"Live demo"</a>
                    <a href=project.links.source target="_blank" rel="noopener noreferrer">"Source"</a>
                </div>
            </div>
        </article>
    }
}
