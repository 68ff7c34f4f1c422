//! 研究セクション（検索・タグ絞り込み・概要ダイアログ）

use crate::observer::use_entrance;
use leptos::prelude::*;
use portfolio_common::filter::{filter_by_tag_and_query, tag_choices};
use portfolio_common::{FilterState, PaperDetail, ResearchPaper};

#[component]
pub fn Research(papers: Vec<ResearchPaper>) -> impl IntoView {
    let entered = use_entrance("research");
    let (filter, set_filter) = signal(FilterState::new());
    let detail = RwSignal::new(PaperDetail::default());

    let tags = tag_choices(&papers)
        .into_iter()
        .map(|tag| {
            let active = tag.clone();
            let clicked = tag.clone();
            view! {
                <button
                    class="tag-btn"
                    class:active=move || filter.with(|f| f.is_tag_active(&active))
                    on:click=move |_| set_filter.update(|f| f.toggle_tag(&clicked))
                >
                    {tag}
                </button>
            }
        })
        .collect_view();

    let all_papers = papers.clone();
    let visible = Signal::derive(move || filter.with(|f| filter_by_tag_and_query(&all_papers, f)));
    let selected = move || detail.with(|d| d.selected(&papers).cloned());

    view! {
        <section id="research" class="section reveal" class:revealed=move || entered.get()>
            <h2 class="section-title">"Research"</h2>
            <div class="research-controls">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search papers..."
                    prop:value=move || filter.with(|f| f.search_query.clone())
                    on:input=move |ev| set_filter.update(|f| f.set_query(&event_target_value(&ev)))
                />
                <div class="tags">{tags}</div>
            </div>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p>"No papers match your search."</p>
                            <button class="btn btn-outline" on:click=move |_| set_filter.update(|f| f.clear())>
                                "Clear filters"
                            </button>
                        </div>
                    }
                }
            >
                <div class="paper-list">
                    <For
                        each=move || visible.get()
                        key=|paper| paper.id
                        children=move |paper| view! { <PaperCard paper=paper detail=detail /> }
                    />
                </div>
            </Show>
            {move || {
                selected()
                    .map(|paper| view! { <PaperDialog paper=paper detail=detail /> })
            }}
        </section>
    }
}

#[component]
fn PaperCard(paper: ResearchPaper, detail: RwSignal<PaperDetail>) -> impl IntoView {
    let id = paper.id;
    let tags = paper
        .tags
        .into_iter()
        .map(|tag| view! { <span class="paper-tag">{tag}</span> })
        .collect_view();

    view! {
        <article class="paper-card">
            <h3>{paper.title}</h3>
            <p class="journal">{paper.journal}" · "{paper.date}</p>
            <div class="paper-tags">{tags}</div>
            <button class="btn btn-link" on:click=move |_| detail.update(|d| d.open(id))>
                "Read abstract"
            </button>
        </article>
    }
}

#[component]
fn PaperDialog(paper: ResearchPaper, detail: RwSignal<PaperDetail>) -> impl IntoView {
    let close = move |_| detail.update(|d| d.close());

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" aria-label="Close" on:click=close>"✕"</button>
                <h3>{paper.title}</h3>
                <p class="journal">{paper.journal}" · "{paper.date}</p>
                <p class="abstract">{paper.summary}</p>
                <a href=paper.link target="_blank" rel="noopener noreferrer">"View publication"</a>
            </div>
        </div>
    }
}
