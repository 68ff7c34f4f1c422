//! メインアプリケーションコンポーネント

use crate::components::{
    about::About, certifications::Certifications, contact::Contact, experience::Experiences,
    footer::Footer, hero::Hero, navbar::Navbar, projects::Projects, research::Research,
    scroll_top::ScrollTopButton, skills::Skills,
};
use crate::observer::provide_page_observer;
use gloo::console::warn;
use leptos::prelude::*;
use portfolio_common::{Portfolio, SectionRegistry, SiteConfig};

const SITE_CONFIG: &str = include_str!("../site.json");

/// 同梱の設定を読み込む。壊れていればデフォルト値で続行する
fn load_site_config() -> SiteConfig {
    SiteConfig::from_json(SITE_CONFIG).unwrap_or_else(|e| {
        warn!(format!("site.json を読み込めませんでした: {}", e));
        SiteConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();
    let portfolio = Portfolio::builtin();
    let registry = SectionRegistry::portfolio();

    provide_page_observer(registry.clone(), config.observer.clone());

    let Portfolio {
        profile,
        experiences,
        skills,
        projects,
        papers,
        certifications,
        contact_channels,
    } = portfolio;

    view! {
        <Navbar
            brand=profile.name.clone()
            sections=registry.as_slice().to_vec()
            breakpoint=config.menu.mobile_breakpoint
        />
        <main>
            <Hero profile=profile.clone() />
            <About profile=profile.clone() />
            <Experiences experiences=experiences />
            <Skills skills=skills />
            <Projects projects=projects />
            <Research papers=papers />
            <Certifications certifications=certifications />
            <Contact channels=contact_channels config=config.contact.clone() />
        </main>
        <Footer profile=profile />
        <ScrollTopButton />
    }
}
