pub mod message;
pub mod post;
pub mod session;

pub use message::{ChatMessage, MessageId, Role};
pub use post::{BlogPost, ReadingTime};
pub use session::ChatSession;
