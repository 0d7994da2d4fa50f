//! Domain Layer
//!
//! Contains the feedback entity and core abstractions.
//! Depends only on serde for serialization and chrono for timestamps.

mod entity;
mod feedback;

pub use entity::{Entity, DomainError, DomainResult};
pub use feedback::{now_timestamp, Feedback, NewFeedback, NAME_PLACEHOLDER, TOPIC_PLACEHOLDER};
