//! Feedback Submission

use wasm_bindgen::JsValue;
use web_sys::{Headers, Request, RequestInit};

use super::{js_error, send};
use crate::config::FEEDBACK_URL;
use crate::models::FeedbackPayload;

/// POST feedback as JSON; any non-2xx status is an error
pub async fn submit_feedback(payload: &FeedbackPayload) -> Result<(), String> {
    let body = serde_json::to_string(payload).map_err(|e| format!("Serialization error: {}", e))?;

    let headers = Headers::new().map_err(js_error)?;
    headers.set("Content-Type", "application/json").map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(FEEDBACK_URL, &init).map_err(js_error)?;
    let response = send(&request).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("Feedback rejected: HTTP {}", response.status()))
    }
}
