//! The request helper: `get` and `post` with callback or awaitable completion.

use crate::helper::{HelperConfig, HelperError};
use crate::http::{JsonRequest, JsonResponse, Method, StatusCode};
use crate::transport::{HyperTransport, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Hook deciding whether a response status is acceptable.
pub type StatusCheck = Arc<dyn Fn(StatusCode) -> Result<(), HelperError> + Send + Sync>;

/// Outcome of one request, delivered once the transport is done.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Method of the originating request.
    pub method: Method,
    /// Resolved URL, or the URL as given if it could not be resolved.
    pub url: String,
    /// Status reported by the transport, if the exchange got that far.
    pub status: Option<StatusCode>,
    /// Parsed response body or the failure cause.
    pub result: Result<Value, HelperError>,
}

impl Completion {
    fn failed(method: Method, url: impl Into<String>, error: HelperError) -> Self {
        Self {
            method,
            url: url.into(),
            status: None,
            result: Err(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// The parsed value, if the request succeeded.
    pub fn value(&self) -> Option<&Value> {
        self.result.as_ref().ok()
    }

    pub fn into_result(self) -> Result<Value, HelperError> {
        self.result
    }

    /// Deserialize the parsed value into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HelperError> {
        match &self.result {
            Ok(value) => Ok(T::deserialize(value)?),
            Err(e) => Err(e.clone()),
        }
    }
}

/// Issues JSON GET and POST requests over a [`Transport`].
///
/// `get` and `post` return immediately; the request runs on its own tokio
/// task and `on_complete` is invoked exactly once when the transport is
/// done, whatever the outcome. Both must be called from within a tokio
/// runtime. There is no timeout and no cancellation.
///
/// By default every status is accepted and its body decoded. Install a
/// hook with [`with_status_check`](Self::with_status_check) or
/// [`require_success`](Self::require_success) to reject statuses.
#[derive(Clone)]
pub struct RequestHelper {
    config: Arc<HelperConfig>,
    transport: Arc<dyn Transport>,
    status_check: Option<StatusCheck>,
}

impl RequestHelper {
    /// Create a helper using the hyper transport.
    pub fn new(config: HelperConfig) -> Self {
        let transport = HyperTransport::new(config.max_body_size);
        Self::with_transport(config, transport)
    }

    /// Create a helper over a custom transport.
    pub fn with_transport(config: HelperConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
            status_check: None,
        }
    }

    /// Install a status-check hook, replacing any previous one.
    pub fn with_status_check<F>(mut self, check: F) -> Self
    where
        F: Fn(StatusCode) -> Result<(), HelperError> + Send + Sync + 'static,
    {
        self.status_check = Some(Arc::new(check));
        self
    }

    /// Reject any non-2xx status with a `Status` error.
    pub fn require_success(self) -> Self {
        self.with_status_check(|status| {
            if status.is_success() {
                Ok(())
            } else {
                Err(HelperError::status(status, "non-success status"))
            }
        })
    }

    /// Issue a GET to `url` and hand the parsed body to `on_complete`.
    pub fn get<F>(&self, url: impl Into<String>, on_complete: F)
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        self.dispatch(Ok(JsonRequest::get(url)), on_complete);
    }

    /// Serialize `data` and POST it to `url`, handing the parsed body to
    /// `on_complete`. A serialization failure is also delivered there.
    pub fn post<T, F>(&self, data: &T, url: impl Into<String>, on_complete: F)
    where
        T: Serialize + ?Sized,
        F: FnOnce(Completion) + Send + 'static,
    {
        self.dispatch(prepare_post(data, url.into()), on_complete);
    }

    /// Awaitable form of [`get`](Self::get).
    pub async fn get_json(&self, url: impl Into<String>) -> Completion {
        self.send(JsonRequest::get(url)).await
    }

    /// Awaitable form of [`post`](Self::post).
    pub async fn post_json<T>(&self, data: &T, url: impl Into<String>) -> Completion
    where
        T: Serialize + ?Sized,
    {
        match prepare_post(data, url.into()) {
            Ok(request) => self.send(request).await,
            Err(completion) => self.finish(completion),
        }
    }

    /// Resolve, send and decode a single request.
    pub async fn send(&self, mut request: JsonRequest) -> Completion {
        let method = request.method;
        request.url = match self.config.resolve_url(&request.url) {
            Ok(url) => url,
            Err(e) => return self.finish(Completion::failed(method, request.url.clone(), e)),
        };
        request.headers = self.merge_headers(&request);

        let url = request.url.clone();
        debug!("Sending {} {}", method, url);

        let completion = match self.transport.send(request).await {
            Ok(response) => Completion {
                method,
                url,
                status: Some(response.status),
                result: self.decode(&response),
            },
            Err(e) => Completion::failed(method, url, e),
        };
        self.finish(completion)
    }

    fn dispatch<F>(&self, prepared: Result<JsonRequest, Completion>, on_complete: F)
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        let helper = self.clone();
        tokio::spawn(async move {
            let completion = match prepared {
                Ok(request) => helper.send(request).await,
                Err(completion) => helper.finish(completion),
            };
            on_complete(completion);
        });
    }

    /// Request headers win over config headers, which win over the JSON
    /// defaults. Names compare case-insensitively.
    fn merge_headers(&self, request: &JsonRequest) -> HashMap<String, String> {
        let mut headers: HashMap<String, String> = request
            .headers
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.clone()))
            .collect();
        for (key, value) in &self.config.headers {
            headers
                .entry(key.to_ascii_lowercase())
                .or_insert_with(|| value.clone());
        }
        headers
            .entry("accept".to_string())
            .or_insert_with(|| "application/json".to_string());
        if request.body.is_some() {
            headers
                .entry("content-type".to_string())
                .or_insert_with(|| "application/json".to_string());
        }
        headers
    }

    fn decode(&self, response: &JsonResponse) -> Result<Value, HelperError> {
        if let Some(check) = &self.status_check {
            check(response.status)?;
        }
        Ok(response.json_body()?)
    }

    fn finish(&self, completion: Completion) -> Completion {
        match &completion.result {
            Ok(value) if self.config.log_responses => {
                info!(
                    method = %completion.method,
                    url = %completion.url,
                    status = completion.status.map(|s| s.0),
                    "{}",
                    value
                );
            }
            Ok(_) => {}
            Err(e) => {
                warn!("{} {} failed: {}", completion.method, completion.url, e);
            }
        }
        completion
    }
}

fn prepare_post<T: Serialize + ?Sized>(data: &T, url: String) -> Result<JsonRequest, Completion> {
    JsonRequest::post(data, url.as_str())
        .map_err(|e| Completion::failed(Method::Post, url, HelperError::encode(e.to_string())))
}
