//! Menu State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::menu::{CategoryFilter, LoadState};
use crate::models::{CategoryTab, MenuDocument, MenuItem};

/// Page-session menu state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Flattened items, category-major order
    pub items: Vec<MenuItem>,
    /// Category tabs from the loaded document
    pub categories: Vec<CategoryTab>,
    /// Fetch/parse status of the menu document
    pub load_state: LoadState,
    /// Selected category (defaults to all)
    pub category: CategoryFilter,
    /// Trimmed search term (debounced)
    pub search_term: String,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of the one-shot menu fetch
    pub fn apply_load(&mut self, result: Result<MenuDocument, String>) {
        match result {
            Ok(doc) => {
                self.categories = doc.category_tabs();
                self.items = doc.flatten();
                self.load_state = LoadState::Loaded;
            }
            Err(reason) => {
                self.items.clear();
                self.categories.clear();
                self.load_state = LoadState::Failed(reason);
            }
        }
    }
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}
