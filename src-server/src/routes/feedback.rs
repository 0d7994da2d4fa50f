//! Feedback Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::domain::{Feedback, NewFeedback};
use crate::error::AppError;
use crate::repository::Repository;
use crate::AppState;

/// Request body; `null` and missing fields read as empty
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackList {
    pub feedback: Vec<Feedback>,
}

pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected feedback body: {}", rejection.body_text());
        AppError::InvalidJson
    })?;

    // An empty object carries no submission at all
    if matches!(&body, Value::Object(fields) if fields.is_empty()) {
        warn!("Rejected empty feedback body");
        return Err(AppError::InvalidJson);
    }

    let submission: FeedbackSubmission = serde_json::from_value(body).map_err(|e| {
        warn!("Rejected feedback body: {}", e);
        AppError::InvalidJson
    })?;

    let draft = NewFeedback::from_submission(
        submission.name.as_deref().unwrap_or_default(),
        submission.topic.as_deref().unwrap_or_default(),
        submission.message.as_deref().unwrap_or_default(),
    )?;

    let stored = state.feedback_repo.create(draft).await?;
    info!(id = stored.id, topic = %stored.topic, "Feedback saved");

    Ok(Json(json!({
        "success": true,
        "message": "Feedback received and saved successfully"
    })))
}

pub async fn list_feedback(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FeedbackList>, AppError> {
    let feedback = state.feedback_repo.list().await?;
    Ok(Json(FeedbackList { feedback }))
}
