//! Menu Document Loading

use web_sys::Request;

use super::{js_error, read_text, send};
use crate::config::MENU_URL;
use crate::models::MenuDocument;

/// Fetch and parse the menu document (no retry)
pub async fn fetch_menu() -> Result<MenuDocument, String> {
    let request = Request::new_with_str(MENU_URL).map_err(js_error)?;
    let response = send(&request).await?;
    if !response.ok() {
        return Err(format!("Failed to load menu data: HTTP {}", response.status()));
    }
    let body = read_text(&response).await?;
    MenuDocument::parse(&body)
}
