//! トップ（home）セクション

use leptos::prelude::*;
use portfolio_common::types::Profile;
use std::time::Duration;

/// 肩書きの切り替え間隔
const ROLE_ROTATION: Duration = Duration::from_millis(3000);

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let roles = profile.roles;
    let count = roles.len();
    let (index, set_index) = signal(0usize);

    if count > 1 {
        if let Ok(handle) = set_interval_with_handle(
            move || set_index.update(|i| *i = (*i + 1) % count),
            ROLE_ROTATION,
        ) {
            on_cleanup(move || handle.clear());
        }
    }

    let role = move || roles.get(index.get()).cloned().unwrap_or_default();
    let links = profile
        .links
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.url class="social-link" target="_blank" rel="noopener noreferrer">
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <p class="hero-greeting">"Hello, I'm"</p>
                <h1 class="hero-name">{profile.name}</h1>
                <h2 class="hero-role">{role}</h2>
                <p class="hero-headline">{profile.headline}</p>
                <div class="hero-actions">
                    <a href="#contact" class="btn btn-primary">"Get in touch"</a>
                    <a href=profile.resume_url class="btn btn-outline" target="_blank" rel="noopener noreferrer">
                        "Download CV"
                    </a>
                </div>
                <div class="hero-links">{links}</div>
            </div>
        </section>
    }
}
