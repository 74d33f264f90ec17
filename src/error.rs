//! Error types for the image generation call.

/// Errors surfaced by the image generation service.
///
/// Every variant's `Display` is the underlying description alone; the
/// binary prefixes it with `Image generation error: ` and exits 1.
#[derive(Debug, thiserror::Error)]
pub enum DalleError {
    /// The service returned a non-success status.
    #[error("{message}")]
    Service {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable description extracted from the response body.
        message: String,
    },

    /// A success response that did not contain the promised image URLs.
    #[error("{0}")]
    UnexpectedResponse(String),

    /// Network, HTTP, or response-decoding failure.
    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for image generation operations.
pub type Result<T> = std::result::Result<T, DalleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_displays_message_verbatim() {
        let err = DalleError::Service {
            status: 429,
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_unexpected_response_display() {
        let err = DalleError::UnexpectedResponse("response contained no image URL".into());
        assert_eq!(err.to_string(), "response contained no image URL");
    }
}
