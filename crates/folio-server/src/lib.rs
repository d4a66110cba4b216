pub mod error;
pub mod handlers;
pub mod logging;
pub mod relay;
pub mod server;
pub mod state;

pub use error::AppError;
pub use relay::{ChatRelay, MISSING_CREDENTIAL_REPLY, RELAY_FAILURE_REPLY};
pub use server::{create_router, run_server};
pub use state::AppState;
