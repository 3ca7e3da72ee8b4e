//! Catalog error taxonomy.
//!
//! Transport and status failures surface to the session controller, which
//! transitions the view to an error state carrying a human-readable message.
//! There is no automatic retry; the user must invoke retry explicitly.
//! Storage faults never appear here - the persistence binding absorbs them.

use thiserror::Error;

/// Errors from the remote catalog client.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (connect, DNS, I/O).
    #[error("HTTP error! {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_code() {
        let err = CatalogError::Status(500);
        assert_eq!(err.to_string(), "HTTP error! status: 500");

        let err = CatalogError::Status(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }
}
