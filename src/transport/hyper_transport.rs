//! Default transport built on the hyper client.

use crate::helper::HelperError;
use crate::http::{JsonRequest, JsonResponse, StatusCode};
use crate::transport::Transport;
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::collections::HashMap;
use tracing::debug;

/// Plain-http transport over a pooled hyper client.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector, Full<Bytes>>,
    max_body_size: usize,
}

impl HyperTransport {
    pub fn new(max_body_size: usize) -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self {
            client,
            max_body_size,
        }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new(10 * 1024 * 1024)
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn send(&self, request: JsonRequest) -> Result<JsonResponse, HelperError> {
        let uri: hyper::Uri = request
            .url
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| HelperError::invalid_url(e.to_string()))?;

        let mut builder = hyper::Request::builder()
            .method(hyper::Method::from(request.method))
            .uri(uri);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let req = builder.body(Full::new(request.body.unwrap_or_default()))?;

        let response = self.client.request(req).await?;
        let status = StatusCode::from(response.status());

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_string(), v.to_string());
            }
        }

        let body_bytes = response.into_body().collect().await?.to_bytes();
        debug!("Received {} bytes with status {}", body_bytes.len(), status);
        let body = if body_bytes.len() > self.max_body_size {
            return Err(HelperError::transport(format!(
                "response body too large ({} > {} bytes)",
                body_bytes.len(),
                self.max_body_size
            )));
        } else if body_bytes.is_empty() {
            None
        } else {
            Some(body_bytes)
        };

        Ok(JsonResponse {
            status,
            headers,
            body,
        })
    }
}
