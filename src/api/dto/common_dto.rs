//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Generic message response for routes that return no record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome description.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response from any displayable value.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Query parameters for the name search endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct KeywordParams {
    /// Keyword matched against the customer name.
    pub keyword: String,
}
