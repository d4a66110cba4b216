use serde::{Deserialize, Serialize};

use crate::types::ChatMessage;

/// Successful relay reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayResponse {
    pub message: ChatMessage,
}

/// Error body shared by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
