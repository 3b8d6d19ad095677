//! # jsonreq - asynchronous JSON request helper
//!
//! `jsonreq` issues HTTP GET and POST requests whose bodies are JSON. Each
//! call returns immediately and runs on its own tokio task. When the
//! transport is done, the parsed body is logged and handed to a completion
//! callback.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  get / post   ┌────────────────┐   send    ┌──────────────┐
//! │    caller    │ ────────────▶ │ RequestHelper  │ ────────▶ │  Transport   │
//! │              │ ◀──────────── │ (spawned task) │ ◀──────── │ (hyper, ...) │
//! └──────────────┘  Completion   └────────────────┘  response └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jsonreq::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let helper = RequestHelper::new(HelperConfig::new().base_url("http://localhost:5000"));
//!     let (tx, rx) = tokio::sync::oneshot::channel();
//!
//!     helper.post(&serde_json::json!("trivia"), "/games/", move |completion| {
//!         let _ = tx.send(completion);
//!     });
//!
//!     let completion = rx.await.unwrap();
//!     println!("{:?}", completion.result);
//! }
//! ```
//!
//! ## Completion semantics
//!
//! - The callback fires exactly once, when the transport finishes.
//! - Concurrent requests complete independently and in no particular order.
//! - No status check by default: a 404 with a JSON body is a successful
//!   completion. Use [`RequestHelper::require_success`] or
//!   [`RequestHelper::with_status_check`] to change that.
//! - No timeout and no cancellation. A transport that never finishes never
//!   completes.

pub mod helper;
pub mod http;
pub mod transport;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::helper::{Completion, ErrorKind, HelperConfig, HelperError, RequestHelper};
    pub use crate::http::{JsonRequest, JsonResponse, Method, StatusCode};
    pub use crate::transport::{HyperTransport, Transport};
    pub use async_trait::async_trait;
}

// Re-export for convenience
pub use helper::{Completion, HelperConfig, HelperError, RequestHelper};
pub use http::{JsonRequest, JsonResponse};
pub use transport::Transport;
