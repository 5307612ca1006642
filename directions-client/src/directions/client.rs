//! Directions API client.
//!
//! Dispatches a [`DirectionsRequest`] through a [`Transport`] and decodes
//! the JSON payload into response types.

use tracing::{debug, warn};

use crate::request::DirectionsRequest;

use super::error::DirectionsError;
use super::transport::{HttpTransport, HttpTransportConfig, Transport};
use super::types::DirectionsResponse;

/// Maximum number of body characters kept in a JSON error.
const ERROR_BODY_CHARS: usize = 500;

/// Client for the directions API.
#[derive(Debug, Clone)]
pub struct DirectionsClient<T = HttpTransport> {
    transport: T,
}

impl DirectionsClient<HttpTransport> {
    /// Create a client backed by `reqwest`.
    pub fn http(config: HttpTransportConfig) -> Result<Self, DirectionsError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> DirectionsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request directions.
    ///
    /// `ZERO_RESULTS` is returned as a successful response with no routes.
    /// Any other non-`OK` status becomes [`DirectionsError::Api`].
    pub async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let url = request.to_request_url();
        debug!(
            travel_mode = request.travel_mode().keyword(),
            waypoints = request.waypoint_count(),
            "requesting directions"
        );

        let body = self.transport.get(&url).await?;
        debug!(bytes = body.len(), "received directions payload");

        let response = decode_response(&body)?;

        if !response.status.is_success() {
            let status = response.status.as_str().to_string();
            warn!(%status, "directions API returned failure status");
            return Err(DirectionsError::Api {
                status,
                message: response.error_message.unwrap_or_default(),
            });
        }

        Ok(response)
    }
}

fn decode_response(body: &[u8]) -> Result<DirectionsResponse, DirectionsError> {
    serde_json::from_slice(body).map_err(|e| DirectionsError::Json {
        message: e.to_string(),
        body: Some(
            String::from_utf8_lossy(body)
                .chars()
                .take(ERROR_BODY_CHARS)
                .collect(),
        ),
    })
}
