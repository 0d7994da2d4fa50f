//! Menu List Component
//!
//! Renders the filtered menu. Whenever the filter or data changes, cards on
//! screen fade out for a fixed duration before the new list is mounted.
//! Empty results show the no-results panel; load failures show an inline error.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::components::MenuItemCard;
use crate::config::MENU_LOAD_ERROR;
use crate::menu::{menu_view, ListSwap, ListTransition, MenuFilter, MenuView};
use crate::store::{use_menu_store, MenuStateStoreFields};

#[component]
pub fn MenuList() -> impl IntoView {
    let store = use_menu_store();

    // What should be on screen for the current state
    let target = Memo::new(move |_| {
        let filter = MenuFilter::new(store.category().get(), &store.search_term().get());
        let state = store.load_state().get();
        store.items().with(|items| menu_view(&state, items, &filter))
    });

    // What is on screen right now
    let shown = RwSignal::new(MenuView::Loading);
    let (leaving, set_leaving) = signal(false);
    let swap = StoredValue::new(ListSwap::default());

    Effect::new(move |_| {
        let next = target.get();
        let shown_cards = shown.with_untracked(MenuView::card_count);

        let mut step = ListTransition::Mount;
        swap.update_value(|s| step = s.plan(shown_cards));

        match step {
            ListTransition::Mount => {
                set_leaving.set(false);
                shown.set(next);
            }
            ListTransition::FadeOut { ticket, delay } => {
                set_leaving.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(delay.as_millis() as u32).await;
                    // A newer render superseded this one
                    if !swap.with_value(|s| s.may_mount(ticket)) {
                        return;
                    }
                    set_leaving.set(false);
                    shown.set(next);
                });
            }
        }
    });

    view! {
        <div id="menu-container" class="menu-grid" aria-live="polite">
            {move || match shown.get() {
                MenuView::Loading => view! {
                    <p class="menu-loading">"Loading menu..."</p>
                }.into_any(),
                MenuView::Error(_) => view! {
                    <p class="error">{MENU_LOAD_ERROR}</p>
                }.into_any(),
                MenuView::Empty => ().into_any(),
                MenuView::Items(items) => items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| view! { <MenuItemCard item=item index=index leaving=leaving /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>

        <div
            id="no-results"
            class=move || if shown.with(|v| matches!(v, MenuView::Empty)) { "no-results show" } else { "no-results" }
        >
            <p class="no-results-title">"No dishes found"</p>
            <p class="no-results-hint">"Try a different search term or category."</p>
        </div>
    }
}
