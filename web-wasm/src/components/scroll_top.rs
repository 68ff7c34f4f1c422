//! 「トップへ戻る」ボタン

use crate::observer::use_page_observer;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let state = use_page_observer().state();

    view! {
        <Show when=move || state.with(|s| s.show_scroll_top)>
            <button class="scroll-top" aria-label="Scroll to top" on:click=move |_| scroll_to_top()>
                "↑"
            </button>
        </Show>
    }
}
