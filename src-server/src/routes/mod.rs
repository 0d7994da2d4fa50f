//! HTTP Routes
//!
//! `/api/*` handlers plus static hosting of the built menu page.

mod feedback;
mod health;

use std::{path::Path, sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;

pub use feedback::{list_feedback, submit_feedback, FeedbackSubmission};
pub use health::health_check;

pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/feedback", post(submit_feedback))
        .route("/api/feedback/list", get(list_feedback))
        .route("/api/health", get(health_check))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
