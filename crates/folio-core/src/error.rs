use thiserror::Error;

/// Rejection reasons for an inbound chat payload
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid request body")]
    NotAnObject,

    #[error("Invalid messages format")]
    MessagesNotArray,

    #[error("Invalid messages format: at least one message is required")]
    EmptyMessages,

    #[error("Invalid messages format: message {index} {reason}")]
    InvalidMessage { index: usize, reason: String },

    #[error("Invalid apiKey format")]
    InvalidApiKey,
}
