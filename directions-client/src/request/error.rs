//! Request construction error types.

/// Errors raised while building a directions request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// The API key was empty or whitespace
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// The serialized request could not be parsed as a URL
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(RequestError::EmptyApiKey.to_string(), "API key must not be empty");
        assert_eq!(
            RequestError::InvalidUrl("empty host".into()).to_string(),
            "invalid request URL: empty host"
        );
    }
}
