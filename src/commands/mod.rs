//! Backend Bindings
//!
//! Fetch wrappers for the menu document and the feedback endpoint, organized by domain.

mod menu;
mod feedback;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

// Re-export all public items
pub use menu::*;
pub use feedback::*;

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Run a request through `window.fetch`
async fn send(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or("No window available")?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    value.dyn_into::<Response>().map_err(js_error)
}

/// Read the whole response body as text
async fn read_text(response: &Response) -> Result<String, String> {
    let promise = response.text().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    value.as_string().ok_or_else(|| "Response body is not text".to_string())
}
