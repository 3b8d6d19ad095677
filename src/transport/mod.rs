//! Transport seam between the helper and the network.

mod hyper_transport;

pub use hyper_transport::HyperTransport;

use crate::helper::HelperError;
use crate::http::{JsonRequest, JsonResponse};
use async_trait::async_trait;

/// Performs one network exchange and resolves when it is done.
///
/// The helper never times out or cancels a send: if the returned future
/// never resolves, the request's completion never fires.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request whose URL has already been resolved.
    async fn send(&self, request: JsonRequest) -> Result<JsonResponse, HelperError>;
}
