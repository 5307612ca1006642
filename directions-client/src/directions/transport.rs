//! HTTP transport for dispatching directions requests.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use tokio::sync::Semaphore;
use tracing::{debug, trace};

use super::error::TransportError;

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Issues a GET for a fully built request URL and returns the raw body.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

/// Configuration for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
}

impl HttpTransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

/// `reqwest`-backed transport.
///
/// A semaphore caps the number of requests in flight.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    semaphore: Arc<Semaphore>,
}

impl HttpTransport {
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        if config.max_concurrent == 0 {
            return Err(TransportError::Unavailable(
                "max_concurrent must be at least 1".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }
}

/// Map a non-success HTTP status to a transport error.
fn error_for_status(status: StatusCode, body: String) -> TransportError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TransportError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => TransportError::RateLimited,
        _ => TransportError::Status {
            status: status.as_u16(),
            message: body,
        },
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TransportError::Unavailable("semaphore closed".to_string()))?;

        let response = self.http.get(url).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "directions response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, body));
        }

        let body = response.bytes().await?;
        trace!(bytes = body.len(), "read response body");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = HttpTransportConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_concurrent, 5);
    }

    #[test]
    fn config_builders() {
        let config = HttpTransportConfig::new()
            .with_timeout(5)
            .with_max_concurrent(2);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_concurrent, 2);
    }

    #[test]
    fn reject_zero_concurrency() {
        let err = HttpTransport::new(HttpTransportConfig::new().with_max_concurrent(0)).unwrap_err();
        assert!(matches!(err, TransportError::Unavailable(_)));
    }

    #[test]
    fn builds_with_defaults() {
        assert!(HttpTransport::new(HttpTransportConfig::default()).is_ok());
    }

    #[test]
    fn auth_statuses_are_unauthorized() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let err = error_for_status(status, "denied".to_string());
            assert!(matches!(err, TransportError::Unauthorized), "{status}");
        }
    }

    #[test]
    fn too_many_requests_is_rate_limited() {
        let err = error_for_status(StatusCode::TOO_MANY_REQUESTS, String::new());
        assert!(matches!(err, TransportError::RateLimited));
    }

    #[test]
    fn other_statuses_keep_code_and_body() {
        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        match err {
            TransportError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Status, got {other:?}"),
        }

        let err = error_for_status(StatusCode::NOT_FOUND, String::new());
        assert!(matches!(err, TransportError::Status { status: 404, .. }));
    }
}
