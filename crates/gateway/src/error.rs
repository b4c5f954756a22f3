//! Error types for gateway operations.

/// Errors that can occur while talking to the gateway.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request itself failed (connection, timeout, decode).
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status code.
    #[error("gateway returned HTTP {status} for {endpoint}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The endpoint path that was called.
        endpoint: String,
    },
}

/// A specialized Result type for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_status() {
        let err = Error::Status {
            status: 503,
            endpoint: "/tools/invoke".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "gateway returned HTTP 503 for /tools/invoke"
        );
    }
}
