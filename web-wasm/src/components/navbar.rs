//! ナビゲーションバー

use crate::observer::use_page_observer;
use leptos::ev;
use leptos::prelude::*;
use portfolio_common::{NavMenu, Section};

fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[component]
pub fn Navbar(brand: String, sections: Vec<Section>, breakpoint: f64) -> impl IntoView {
    let state = use_page_observer().state();
    let menu = RwSignal::new(NavMenu::new(breakpoint));

    let measure = move || {
        if let Some(width) = window_width() {
            menu.update(|m| m.resize(width));
        }
    };
    measure();
    let resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    let links = sections
        .into_iter()
        .map(|section| {
            let href = section.href();
            let id = section.id;
            let is_active =
                move || state.with(|s| s.active_section_id.as_deref() == Some(id.as_str()));
            view! {
                <li>
                    <a
                        href=href
                        class="nav-link"
                        class:active=is_active
                        on:click=move |_| menu.update(|m| m.navigate())
                    >
                        {section.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header
            class="navbar"
            class:scrolled=move || state.with(|s| s.header_scrolled)
            class:mobile=move || menu.with(|m| m.is_mobile())
        >
            <a href="#home" class="brand" on:click=move |_| menu.update(|m| m.navigate())>
                {brand}
            </a>
            <Show when=move || menu.with(|m| m.is_mobile())>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    {move || if menu.with(|m| m.is_open()) { "✕" } else { "☰" }}
                </button>
            </Show>
            <nav class="nav-links" class:open=move || menu.with(|m| m.is_open())>
                <ul>{links}</ul>
            </nav>
        </header>
    }
}
