//! Frontend Configuration
//!
//! Static endpoints and timings for the menu page.

/// Menu document, relative to the page
pub const MENU_URL: &str = "menu.json";

/// Feedback submission endpoint
pub const FEEDBACK_URL: &str = "/api/feedback";

/// Trailing-edge delay for search input
pub const SEARCH_DEBOUNCE_MS: u32 = 200;

/// Fade-out duration applied to rendered cards before a re-render
pub const EXIT_TRANSITION_MS: u32 = 300;

/// How long the loading screen stays up after mount
pub const LOADING_SCREEN_MS: u32 = 1500;

/// How long the feedback confirmation is shown before the form resets
pub const FEEDBACK_CONFIRM_MS: u32 = 2000;

/// Scroll offset (px) past which the back-to-top button appears
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Fraction of a section that must be on screen before it fades in
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// localStorage key for the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Shown when a menu image fails to load
pub const IMAGE_PLACEHOLDER: &str =
    "https://via.placeholder.com/400x300/B87333/F5E6D3?text=Image+Not+Available";

pub const MENU_LOAD_ERROR: &str =
    "Unable to load menu. Please ensure menu.json is in the same folder as index.html.";

pub const FEEDBACK_ERROR: &str = "An error occurred. Please try again.";
