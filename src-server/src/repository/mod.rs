//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod feedback_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{open_db, SharedConnection};
pub use feedback_repo::FeedbackRepository;
