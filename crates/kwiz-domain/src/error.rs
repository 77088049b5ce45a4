//! Application errors
//!
//! The closed set of failures that collaborators report and the state
//! container turns into a user-visible message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every failure the app knows how to show to the user
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AppError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Authentication Error: {0}")]
    Authentication(String),
    #[error("Subscription Error: {0}")]
    Subscription(String),
    #[error("Content Error: {0}")]
    Content(String),
}

impl AppError {
    /// The message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::Network(message)
            | AppError::Authentication(message)
            | AppError::Subscription(message)
            | AppError::Content(message) => message,
        }
    }
}
