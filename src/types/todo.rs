use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of `POST /todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoIn {
    pub title: String,
}

impl TodoIn {
    /// Trimmed title; blank titles are rejected.
    pub fn validated_title(&self) -> Result<&str, ApiError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApiError::Validation("title is required".to_string()));
        }
        Ok(title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoOut {
    pub id: i32,
    pub title: String,
    pub done: bool,
}
