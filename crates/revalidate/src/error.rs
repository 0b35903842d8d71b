use reqwest::StatusCode;

use crate::message::Response;

/// Errors raised by a [`Transport`](crate::transport::Transport) send
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The origin answered, but with a status the transport treats as an
    /// error (non-2xx/3xx). Carries the full response.
    #[error("origin returned status code {}", .0.status())]
    Status(Response),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Status code of the origin's error response, if this failure carries
    /// one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Status(response) => Some(response.status()),
            _ => None,
        }
    }
}

/// Errors that cross the revalidation engine's boundary.
///
/// Every ordinary failure mode (bad status, network error, validator
/// mismatch) is converted into a `Revalidation::Invalid` result instead;
/// only a confirmed-gone resource surfaces as an error.
#[derive(Debug, thiserror::Error)]
pub enum RevalidationError {
    /// The origin returned 404 for the revalidated resource. The cache
    /// entry has been evicted; the caller must not serve stale content.
    #[error("resource gone: origin returned 404 for {url}")]
    ResourceGone { url: String },
}
