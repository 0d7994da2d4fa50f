//! Menu Filtering
//!
//! Category + search filtering over the flattened item list, and the
//! helpers the list view uses to decide what to render.

use std::time::Duration;

use crate::config::EXIT_TRANSITION_MS;
use crate::debounce::Generation;
use crate::models::MenuItem;

/// DOM/wire spelling of the catch-all category
pub const ALL_CATEGORIES: &str = "all";

/// Category selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id.to_string())
        }
    }

    pub fn as_id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(id) => id,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => id == category,
        }
    }
}

/// The (category, search term) pair driving the visible list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuFilter {
    pub category: CategoryFilter,
    pub search_term: String,
}

impl MenuFilter {
    pub fn new(category: CategoryFilter, search_term: &str) -> Self {
        Self {
            category,
            search_term: search_term.trim().to_string(),
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        if !self.category.matches(&item.category) {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        item.name.to_lowercase().contains(&term) || item.description.to_lowercase().contains(&term)
    }
}

/// Subsequence of `items` passing `filter`, original order preserved
pub fn filter_items(items: &[MenuItem], filter: &MenuFilter) -> Vec<MenuItem> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Menu data loading status
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// What the menu panel should show
#[derive(Debug, Clone, PartialEq)]
pub enum MenuView {
    Loading,
    Error(String),
    Empty,
    Items(Vec<MenuItem>),
}

impl MenuView {
    /// Number of item cards this view mounts
    pub fn card_count(&self) -> usize {
        match self {
            MenuView::Items(items) => items.len(),
            _ => 0,
        }
    }
}

/// Resolve the view for the current load state and filter
pub fn menu_view(state: &LoadState, items: &[MenuItem], filter: &MenuFilter) -> MenuView {
    match state {
        LoadState::Loading => MenuView::Loading,
        LoadState::Failed(message) => MenuView::Error(message.clone()),
        LoadState::Loaded => {
            let visible = filter_items(items, filter);
            if visible.is_empty() {
                MenuView::Empty
            } else {
                MenuView::Items(visible)
            }
        }
    }
}

/// Fade-out time before mounting new content; zero when nothing is on screen
pub fn exit_delay(previous_cards: usize) -> Duration {
    if previous_cards > 0 {
        Duration::from_millis(EXIT_TRANSITION_MS as u64)
    } else {
        Duration::ZERO
    }
}

/// Next step for the list when the target view changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTransition {
    /// Nothing on screen; mount right away
    Mount,
    /// Fade out the cards on screen, then mount if `ticket` is still current
    FadeOut { ticket: u64, delay: Duration },
}

/// Orders list swaps so the newest filter wins over any pending fade-out
#[derive(Debug, Default)]
pub struct ListSwap {
    generation: Generation,
}

impl ListSwap {
    pub fn plan(&mut self, shown_cards: usize) -> ListTransition {
        let ticket = self.generation.advance();
        let delay = exit_delay(shown_cards);
        if delay.is_zero() {
            ListTransition::Mount
        } else {
            ListTransition::FadeOut { ticket, delay }
        }
    }

    pub fn may_mount(&self, ticket: u64) -> bool {
        self.generation.is_current(ticket)
    }
}

/// `₱120` for whole amounts, `₱250.50` otherwise; halves round away from zero
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("₱{}", price)
    } else {
        format!("₱{:.2}", (price * 100.0).round() / 100.0)
    }
}

/// Staggered entry animation delay for the card at `index`
pub fn card_animation_delay(index: usize) -> String {
    format!("{}s", index as f64 / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuDocument;

    fn make_item(name: &str, description: &str, category: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: description.to_string(),
            price: 100.0,
            image: String::new(),
            category: category.to_string(),
            category_name: category.to_uppercase(),
        }
    }

    fn sample() -> Vec<MenuItem> {
        vec![
            make_item("Lumpia", "Crispy spring rolls", "appetizers"),
            make_item("Kinilaw", "Fresh fish ceviche", "appetizers"),
            make_item("Adobo", "Pork braised in vinegar", "mains"),
            make_item("Halo-Halo", "Shaved ice with SPRING fruits", "desserts"),
        ]
    }

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_category_only_keeps_selected() {
        let filter = MenuFilter::new(CategoryFilter::from_id("appetizers"), "");
        let result = filter_items(&sample(), &filter);
        assert_eq!(names(&result), vec!["Lumpia", "Kinilaw"]);
        assert!(result.iter().all(|i| i.category == "appetizers"));
    }

    #[test]
    fn test_all_passes_every_category() {
        let filter = MenuFilter::new(CategoryFilter::from_id(ALL_CATEGORIES), "");
        assert_eq!(filter_items(&sample(), &filter), sample());
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let filter = MenuFilter::new(CategoryFilter::All, "spring");
        assert_eq!(names(&filter_items(&sample(), &filter)), vec!["Lumpia", "Halo-Halo"]);

        let filter = MenuFilter::new(CategoryFilter::All, "ADOBO");
        assert_eq!(names(&filter_items(&sample(), &filter)), vec!["Adobo"]);
    }

    #[test]
    fn test_search_and_category_combine() {
        let filter = MenuFilter::new(CategoryFilter::from_id("desserts"), "spring");
        assert_eq!(names(&filter_items(&sample(), &filter)), vec!["Halo-Halo"]);
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let filter = MenuFilter::new(CategoryFilter::All, "  adobo ");
        assert_eq!(filter.search_term, "adobo");
        assert_eq!(filter_items(&sample(), &filter).len(), 1);

        let blank = MenuFilter::new(CategoryFilter::All, "   ");
        assert_eq!(filter_items(&sample(), &blank).len(), 4);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = MenuFilter::new(CategoryFilter::from_id("appetizers"), "fish");
        let once = filter_items(&sample(), &filter);
        let twice = filter_items(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_category_yields_empty_view() {
        let filter = MenuFilter::new(CategoryFilter::from_id("drinks"), "");
        let view = menu_view(&LoadState::Loaded, &sample(), &filter);
        assert_eq!(view, MenuView::Empty);
    }

    #[test]
    fn test_two_categories_select_first() {
        let body = r#"{"categories": [
            {"id": "a", "name": "A", "items": [
                {"name": "First", "description": "one", "price": 1, "image": ""},
                {"name": "Second", "description": "two", "price": 2, "image": ""}
            ]},
            {"id": "b", "name": "B", "items": [
                {"name": "Third", "description": "three", "price": 3, "image": ""}
            ]}
        ]}"#;
        let items = MenuDocument::parse(body).unwrap().flatten();
        let filter = MenuFilter::new(CategoryFilter::from_id("a"), "");

        match menu_view(&LoadState::Loaded, &items, &filter) {
            MenuView::Items(visible) => assert_eq!(names(&visible), vec!["First", "Second"]),
            other => panic!("expected items, got {:?}", other),
        }
    }

    #[test]
    fn test_search_without_match_shows_empty_state() {
        let filter = MenuFilter::new(CategoryFilter::All, "pizza");
        let view = menu_view(&LoadState::Loaded, &sample(), &filter);
        assert_eq!(view, MenuView::Empty);
        assert_eq!(view.card_count(), 0);
    }

    #[test]
    fn test_failed_load_shows_error() {
        let view = menu_view(&LoadState::Failed("boom".into()), &[], &MenuFilter::default());
        assert_eq!(view, MenuView::Error("boom".into()));
        assert_eq!(menu_view(&LoadState::Loading, &[], &MenuFilter::default()), MenuView::Loading);
    }

    #[test]
    fn test_exit_delay_only_with_previous_content() {
        assert_eq!(exit_delay(0), Duration::ZERO);
        assert_eq!(exit_delay(3), Duration::from_millis(300));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(120.0), "₱120");
        assert_eq!(format_price(250.5), "₱250.50");
        assert_eq!(format_price(0.0), "₱0");
        assert_eq!(format_price(99.999), "₱100.00");
    }

    #[test]
    fn test_format_price_rounds_halves_up() {
        assert_eq!(format_price(99.125), "₱99.13");
        assert_eq!(format_price(0.125), "₱0.13");
    }

    #[test]
    fn test_format_price_large_whole_amount() {
        assert_eq!(format_price(1e20), "₱100000000000000000000");
    }

    #[test]
    fn test_first_render_mounts_immediately() {
        let mut swap = ListSwap::default();
        assert_eq!(swap.plan(0), ListTransition::Mount);
    }

    #[test]
    fn test_cards_on_screen_fade_out_first() {
        let mut swap = ListSwap::default();
        match swap.plan(4) {
            ListTransition::FadeOut { ticket, delay } => {
                assert_eq!(delay, Duration::from_millis(300));
                assert!(swap.may_mount(ticket));
            }
            other => panic!("expected fade-out, got {:?}", other),
        }
    }

    #[test]
    fn test_newest_filter_supersedes_pending_fade_out() {
        let mut swap = ListSwap::default();
        let mut shown = MenuView::Items(sample());

        // Three filter changes land while the first fade-out is still running
        let targets = vec![
            MenuFilter::new(CategoryFilter::from_id("appetizers"), ""),
            MenuFilter::new(CategoryFilter::All, "spring"),
            MenuFilter::new(CategoryFilter::from_id("mains"), ""),
        ];
        let pending: Vec<(ListTransition, MenuView)> = targets
            .iter()
            .map(|filter| {
                let step = swap.plan(shown.card_count());
                (step, menu_view(&LoadState::Loaded, &sample(), filter))
            })
            .collect();

        // Timers expire in scheduling order; stale tickets never mount
        let mut mounts = 0;
        for (step, next) in pending {
            match step {
                ListTransition::FadeOut { ticket, .. } if swap.may_mount(ticket) => {
                    shown = next;
                    mounts += 1;
                }
                ListTransition::FadeOut { .. } => {}
                ListTransition::Mount => panic!("cards were on screen"),
            }
        }

        assert_eq!(mounts, 1);
        match shown {
            MenuView::Items(items) => assert_eq!(names(&items), vec!["Adobo"]),
            other => panic!("expected items, got {:?}", other),
        }
    }

    #[test]
    fn test_immediate_mount_invalidates_older_fade_out() {
        let mut swap = ListSwap::default();
        let stale = match swap.plan(2) {
            ListTransition::FadeOut { ticket, .. } => ticket,
            other => panic!("expected fade-out, got {:?}", other),
        };
        assert_eq!(swap.plan(0), ListTransition::Mount);
        assert!(!swap.may_mount(stale));
    }

    #[test]
    fn test_card_animation_delay() {
        assert_eq!(card_animation_delay(0), "0s");
        assert_eq!(card_animation_delay(3), "0.3s");
        assert_eq!(card_animation_delay(10), "1s");
    }

    #[test]
    fn test_category_filter_round_trip_id() {
        assert_eq!(CategoryFilter::from_id("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_id("mains").as_id(), "mains");
    }
}
