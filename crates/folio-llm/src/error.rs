use thiserror::Error;

/// Failure talking to the completion service
#[derive(Error, Debug)]
pub enum LLMError {
    #[error("network error: {0}")]
    Network(String),

    #[error("api error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("transform error: {0}")]
    Transform(#[from] ConversionError),

    #[error("config error: {0}")]
    Config(String),

    #[error("rate limited: {0}")]
    RateLimited(String),
}

/// The completion service answered with a body we cannot use
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, LLMError>;
