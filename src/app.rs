//! Pre-Taste Frontend App
//!
//! Page layout: header, hero, filterable menu, references, and the floating
//! back-to-top and feedback controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_viewport::Reveal;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BackToTop, CategoryBar, FeedbackModal, LoadingScreen, MenuList, SearchBox, SiteHeader};
use crate::config::REVEAL_THRESHOLD;
use crate::context::AppContext;
use crate::store::{MenuState, MenuStore};
use crate::theme::{self, Theme};

#[component]
pub fn App(initial_theme: Theme) -> impl IntoView {
    // State
    let theme_signal = signal(initial_theme);
    let feedback_open = signal(false);
    let store: MenuStore = Store::new(MenuState::new());

    // Provide context to all children
    let ctx = AppContext::new(theme_signal, feedback_open);
    provide_context(ctx);
    provide_context(store);

    theme::watch_system_theme(move |next| ctx.follow_system_theme(next));

    // Load the menu once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let result = commands::fetch_menu().await;
            match &result {
                Ok(doc) => web_sys::console::log_1(
                    &format!("[MENU] Loaded {} categories", doc.categories.len()).into(),
                ),
                Err(e) => web_sys::console::error_1(&format!("[MENU] Error loading menu: {}", e).into()),
            }
            store.update(|state| state.apply_load(result));
        });
    });

    view! {
        <LoadingScreen />
        <SiteHeader />

        <main class="page">
            <Reveal id="home" class="hero" threshold=REVEAL_THRESHOLD>
                <h1 class="hero-title">"Pre-Taste"</h1>
                <p class="hero-subtitle">"Preview every dish before you order."</p>
                <a class="hero-cta" href="#menu">"Browse the menu"</a>
            </Reveal>

            <Reveal id="menu" class="menu-section" threshold=REVEAL_THRESHOLD>
                <h2 class="section-title">"Our Menu"</h2>
                <SearchBox />
                <CategoryBar />
                <MenuList />
            </Reveal>

            <Reveal id="about" class="references-section" threshold=REVEAL_THRESHOLD>
                <h2 class="section-title">"Documentation"</h2>
                <p>
                    "Menu data is read from menu.json next to this page. "
                    "Feedback is stored by the Pre-Taste server at /api/feedback."
                </p>
                <ul class="references-list">
                    <li><a href="https://leptos.dev" target="_blank" rel="noopener">"Leptos"</a></li>
                    <li><a href="https://github.com/tokio-rs/axum" target="_blank" rel="noopener">"axum"</a></li>
                </ul>
            </Reveal>
        </main>

        <footer class="site-footer">
            <p>"\u{00A9} Pre-Taste"</p>
        </footer>

        <BackToTop />
        <FeedbackModal />
    }
}
