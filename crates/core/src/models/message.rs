//! Response envelopes shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Body returned by create endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl MessageResponse {
    /// A response carrying the id of the created record.
    #[must_use]
    pub fn created(message: impl Into<String>, id: impl ToString) -> Self {
        Self {
            message: message.into(),
            id: Some(id.to_string()),
        }
    }
}

/// Body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}
