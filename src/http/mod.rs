//! Request and response types exchanged with a transport.

mod request;
mod response;

pub use request::{JsonRequest, Method};
pub use response::{JsonResponse, StatusCode};
