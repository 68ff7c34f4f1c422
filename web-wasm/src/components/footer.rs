//! フッター

use leptos::prelude::*;
use portfolio_common::types::Profile;

#[component]
pub fn Footer(profile: Profile) -> impl IntoView {
    let links = profile
        .links
        .into_iter()
        .map(|link| {
            view! { <a href=link.url target="_blank" rel="noopener noreferrer">{link.label}</a> }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="footer-links">{links}</div>
            <p>"© "{profile.name}</p>
        </footer>
    }
}
