//! Request and response bodies for the HTTP API.
mod request;
mod response;

pub use request::*;
pub use response::*;
