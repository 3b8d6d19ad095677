//! HTTP request helper issuing JSON GET and POST requests.

pub mod client;
pub mod config;
pub mod error;

pub use client::{Completion, RequestHelper, StatusCheck};
pub use config::HelperConfig;
pub use error::{ErrorKind, HelperError};
