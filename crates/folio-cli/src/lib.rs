pub mod app;
pub mod client;

pub use app::{ChatWidget, CLIENT_FAILURE_REPLY};
pub use client::RelayClient;
