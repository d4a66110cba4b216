pub mod chat;
pub mod content;
pub mod health;
pub mod resume;
