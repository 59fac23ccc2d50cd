//! Error types for the API client.

/// Errors that can occur when searching for volumes.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The outbound request did not produce a successful response.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response body could not be read as a search result.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failures of the outbound HTTP call. These are surfaced once and never retried.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The request URL could not be assembled from the configured base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}

/// Failures turning a response body into a [`SearchResponse`](crate::types::SearchResponse).
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The body is not JSON at all, or it ends before the document does.
    #[error("Malformed response body at line {line} column {column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },
    /// The body is valid JSON but does not match the expected shape,
    /// e.g. `totalItems` is missing or is not an integer.
    #[error("Unexpected response shape at line {line} column {column}: {message}")]
    Schema {
        line: usize,
        column: usize,
        message: String,
    },
}

impl DecodeError {
    /// Returns true when the body parsed as JSON but had the wrong shape.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, DecodeError::Schema { .. })
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let (line, column, message) = (e.line(), e.column(), e.to_string());
        match e.classify() {
            Category::Data => DecodeError::Schema {
                line,
                column,
                message,
            },
            Category::Io | Category::Syntax | Category::Eof => DecodeError::Malformed {
                line,
                column,
                message,
            },
        }
    }
}
