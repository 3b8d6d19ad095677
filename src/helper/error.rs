//! Typed failure carried by a completion.

use crate::http::StatusCode;

/// What went wrong with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// URL could not be resolved to an absolute URL.
    InvalidUrl,
    /// POST payload could not be serialized.
    Encode,
    /// Connection, protocol or body-size failure.
    Transport,
    /// Response body was not JSON.
    Decode,
    /// Rejected by a status-check hook.
    Status(StatusCode),
}

/// Request helper error type.
#[derive(Debug, Clone)]
pub struct HelperError {
    /// Error kind.
    pub kind: ErrorKind,
    /// Error message.
    pub message: String,
}

impl HelperError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidUrl, message)
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encode, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// Create a status rejection error.
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Status(status), message)
    }

    /// The status code, if the error is a status rejection.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self.kind {
            ErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }
}

impl std::fmt::Display for HelperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::InvalidUrl => write!(f, "invalid url: {}", self.message),
            ErrorKind::Encode => write!(f, "encode error: {}", self.message),
            ErrorKind::Transport => write!(f, "transport error: {}", self.message),
            ErrorKind::Decode => write!(f, "decode error: {}", self.message),
            ErrorKind::Status(code) => write!(f, "[{}] {}", code, self.message),
        }
    }
}

impl std::error::Error for HelperError {}

impl From<serde_json::Error> for HelperError {
    fn from(err: serde_json::Error) -> Self {
        HelperError::decode(err.to_string())
    }
}

impl From<url::ParseError> for HelperError {
    fn from(err: url::ParseError) -> Self {
        HelperError::invalid_url(err.to_string())
    }
}

impl From<hyper::http::Error> for HelperError {
    fn from(err: hyper::http::Error) -> Self {
        HelperError::transport(err.to_string())
    }
}

impl From<hyper_util::client::legacy::Error> for HelperError {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        HelperError::transport(err.to_string())
    }
}

impl From<hyper::Error> for HelperError {
    fn from(err: hyper::Error) -> Self {
        HelperError::transport(err.to_string())
    }
}
