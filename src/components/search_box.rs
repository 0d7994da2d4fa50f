//! Search Box Component
//!
//! Free-text search over item names and descriptions, debounced.

use leptos::prelude::*;

use crate::config::SEARCH_DEBOUNCE_MS;
use crate::debounce::Debounce;
use crate::store::{use_menu_store, MenuStateStoreFields};

#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_menu_store();
    let debounce = Debounce::new(SEARCH_DEBOUNCE_MS);

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        debounce.call(move || {
            store.search_term().set(value.trim().to_string());
        });
    };

    view! {
        <div class="search-container">
            <input
                id="search-input"
                type="search"
                class="search-input"
                placeholder="Search dishes..."
                aria-label="Search menu"
                autocomplete="off"
                on:input=on_input
            />
        </div>
    }
}
