//! Feedback Entity
//!
//! A guest's note about the food, service or place. Only the message is
//! required; a blank name or topic is stored as a readable placeholder.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

pub const NAME_PLACEHOLDER: &str = "(Not provided)";
pub const TOPIC_PLACEHOLDER: &str = "(Not specified)";

/// Timestamp format for stored rows (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored feedback row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Unique identifier
    #[serde(skip_serializing, default)]
    pub id: i64,
    /// Submission time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    pub name: String,
    pub topic: String,
    pub message: String,
}

impl Entity for Feedback {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Validated submission, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub name: String,
    pub topic: String,
    pub message: String,
}

impl NewFeedback {
    /// Trim fields, require a message, fill placeholders
    pub fn from_submission(name: &str, topic: &str, message: &str) -> DomainResult<Self> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DomainError::InvalidInput("Message is required".into()));
        }

        Ok(Self {
            name: or_placeholder(name, NAME_PLACEHOLDER),
            topic: or_placeholder(topic, TOPIC_PLACEHOLDER),
            message: message.to_string(),
        })
    }

    /// Attach id and timestamp once stored
    pub fn into_feedback(self, id: i64, timestamp: String) -> Feedback {
        Feedback {
            id,
            timestamp,
            name: self.name,
            topic: self.topic,
            message: self.message,
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Current local time in the stored format
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
