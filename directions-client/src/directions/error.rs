//! Directions client error types.

/// Errors from the HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or request denied
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by directions API")]
    RateLimited,

    /// Non-success HTTP status
    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    /// Transport could not be set up or was shut down
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Errors from requesting and decoding directions.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The API answered with a status other than OK or ZERO_RESULTS
    #[error("API error {status}: {message}")]
    Api { status: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TransportError::Status {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "HTTP status 500: Internal Server Error");

        assert_eq!(
            TransportError::Unauthorized.to_string(),
            "unauthorized (invalid API key)"
        );

        let err = DirectionsError::Api {
            status: "REQUEST_DENIED".into(),
            message: "The provided API key is invalid.".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error REQUEST_DENIED: The provided API key is invalid."
        );

        let err = DirectionsError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));

        let err = DirectionsError::from(TransportError::RateLimited);
        assert_eq!(err.to_string(), "rate limited by directions API");
    }
}
