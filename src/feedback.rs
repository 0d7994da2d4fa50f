//! Feedback Form Model
//!
//! Draft state of the feedback form and its client-side validation.

use crate::models::FeedbackPayload;

/// Topic choices (value, label); empty value means "not specified"
pub const TOPICS: &[(&str, &str)] = &[
    ("", "Select a topic"),
    ("general", "General"),
    ("food", "Food"),
    ("service", "Service"),
    ("ambiance", "Ambiance"),
    ("other", "Other"),
];

pub const MESSAGE_REQUIRED: &str = "Please enter a message.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackDraft {
    pub name: String,
    pub topic: String,
    pub message: String,
}

impl FeedbackDraft {
    /// Trim fields and require a message
    pub fn to_payload(&self) -> Result<FeedbackPayload, &'static str> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err(MESSAGE_REQUIRED);
        }
        Ok(FeedbackPayload {
            name: self.name.trim().to_string(),
            topic: self.topic.clone(),
            message: message.to_string(),
        })
    }
}
