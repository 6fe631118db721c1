/// Errors from the procedure client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error body.
    #[error("{code} ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Machine-readable code, e.g. `NOT_FOUND`.
        code: String,
        /// Human-readable message from the server.
        message: String,
    },

    /// A success body did not match the expected output shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// The server's error code, if this is an API error.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}
