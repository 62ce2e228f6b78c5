//! Error types for the catalog search path.
//!
//! Modules return typed errors built with `thiserror`; `main` and the CLI
//! propagate with `anyhow`.

/// A failed album search. Every variant is transient: the next committed
/// query is the next retry opportunity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The API answered with an error body
    #[error("API error {code} ({kind}): {message}")]
    Api {
        code: i64,
        kind: String,
        message: String,
    },

    /// Body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");

        let err = CatalogError::Api {
            code: 4,
            kind: "Exception".to_string(),
            message: "Quota limit exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error 4 (Exception): Quota limit exceeded");
    }
}
