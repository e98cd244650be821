//! Route handlers organized by resource

use serde::Serialize;

pub mod classes;
pub mod health;
pub mod students;

/// `{"message": ...}` body for deletes and enrollment
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
