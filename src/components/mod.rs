//! UI Components
//!
//! Leptos components for the menu page.

mod site_header;
mod theme_toggle;
mod loading_screen;
mod category_bar;
mod search_box;
mod menu_list;
mod menu_item_card;
mod feedback_modal;
mod back_to_top;

pub use site_header::SiteHeader;
pub use theme_toggle::ThemeToggle;
pub use loading_screen::LoadingScreen;
pub use category_bar::CategoryBar;
pub use search_box::SearchBox;
pub use menu_list::MenuList;
pub use menu_item_card::MenuItemCard;
pub use feedback_modal::FeedbackModal;
pub use back_to_top::BackToTop;
