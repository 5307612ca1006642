//! Mock transport for testing without API access.
//!
//! Serves a canned response body (or a canned failure) for every request
//! and records the URLs it was asked for.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::TransportError;
use super::transport::Transport;

#[derive(Debug, Clone)]
enum Reply {
    Body(Vec<u8>),
    Status { status: u16, message: String },
    Unauthorized,
    RateLimited,
}

/// Mock transport that answers every request the same way.
#[derive(Debug, Clone)]
pub struct MockTransport {
    reply: Reply,
    requests: Arc<RwLock<Vec<String>>>,
}

impl MockTransport {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Respond with `body` as a successful response.
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self::with_reply(Reply::Body(body.into()))
    }

    /// Respond with the contents of a JSON file, e.g. a saved API response.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TransportError> {
        let path = path.as_ref();
        let body = std::fs::read(path).map_err(|e| {
            TransportError::Unavailable(format!("failed to read {}: {e}", path.display()))
        })?;
        Ok(Self::with_body(body))
    }

    /// Fail every request with a non-success HTTP status.
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Status {
            status,
            message: message.into(),
        })
    }

    /// Fail every request as unauthorized.
    pub fn unauthorized() -> Self {
        Self::with_reply(Reply::Unauthorized)
    }

    /// Fail every request as rate limited.
    pub fn rate_limited() -> Self {
        Self::with_reply(Reply::RateLimited)
    }

    /// URLs requested so far, oldest first.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.requests.write().await.push(url.to_string());

        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status { status, message } => Err(TransportError::Status {
                status: *status,
                message: message.clone(),
            }),
            Reply::Unauthorized => Err(TransportError::Unauthorized),
            Reply::RateLimited => Err(TransportError::RateLimited),
        }
    }
}
