//! # Transport
//!
//! The transport seam the engine sends conditional requests through, plus
//! the reqwest-backed implementation. The engine holds its transport
//! directly, so a conditional request never travels back through a
//! caching-aware client path.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::error::TransportError;
use crate::message::{Request, Response};

const DEFAULT_USER_AGENT: &str = concat!("revalidate-engine/", env!("CARGO_PKG_VERSION"));

/// Sends a request to the origin and returns its response.
///
/// A non-2xx/3xx answer from the origin must surface as
/// [`TransportError::Status`] carrying the full response; network, timeout
/// and protocol failures surface as the other variants. Timeouts and
/// cancellation are this collaborator's responsibility.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &Request) -> Result<Response, TransportError>;
}

/// Configurable options for [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Overall timeout for the entire HTTP request
    pub timeout: Duration,

    /// Connection timeout (time to establish the initial connection)
    pub connect_timeout: Duration,

    /// Whether to follow redirects
    pub follow_redirects: bool,

    /// User agent string
    pub user_agent: String,

    /// Custom HTTP headers applied to every request
    pub headers: HeaderMap,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            follow_redirects: true,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            headers: HeaderMap::new(),
        }
    }
}

impl TransportConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// reqwest-backed [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a client built from the provided
    /// configuration
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut client_builder = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(config.headers.clone())
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            });

        if !config.timeout.is_zero() {
            client_builder = client_builder.timeout(config.timeout);
        }

        if !config.connect_timeout.is_zero() {
            client_builder = client_builder.connect_timeout(config.connect_timeout);
        }

        Ok(Self {
            client: client_builder.build()?,
        })
    }

    /// Wrap an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<Response, TransportError> {
        let reply = self
            .client
            .request(request.method().clone(), request.url())
            .headers(request.headers().clone())
            .send()
            .await?;

        let status = reply.status();
        let headers = reply.headers().clone();
        let body = reply.bytes().await?;
        let response = Response::new(status, headers, body);

        if status.is_success() || status.is_redirection() {
            Ok(response)
        } else {
            debug!(url = %request.url(), status = %status, "origin answered with an error status");
            Err(TransportError::Status(response))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.follow_redirects);
        assert!(config.user_agent.starts_with("revalidate-engine/"));
        assert!(config.headers.is_empty());
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = TransportConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::ZERO)
            .with_follow_redirects(false)
            .with_user_agent("probe/1.0");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.connect_timeout.is_zero());
        assert!(!config.follow_redirects);
        assert_eq!(config.user_agent, "probe/1.0");
    }

    #[test]
    fn transport_builds_from_config() {
        assert!(HttpTransport::new(&TransportConfig::default()).is_ok());
    }
}
