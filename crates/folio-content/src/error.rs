use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("post not found: {0}")]
    NotFound(String),
    #[error("resume not found")]
    ResumeNotFound,
}

pub type ContentResult<T> = Result<T, ContentError>;
