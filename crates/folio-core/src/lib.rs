pub mod chat;
pub mod clock;
pub mod error;
pub mod types;

pub use types::{
    BlogPost,
    ChatMessage,
    ChatSession,
    MessageId,
    ReadingTime,
    Role,
};

pub use chat::{ErrorBody, RelayRequest, RelayResponse};
pub use error::ValidationError;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
