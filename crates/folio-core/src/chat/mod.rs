pub mod request;
pub mod response;

pub use request::RelayRequest;
pub use response::{ErrorBody, RelayResponse};
