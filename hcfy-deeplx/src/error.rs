/// Error types for the Hcfy ⇄ DeepLX adapter
///
/// Every variant is request-scoped except `Config`, which only surfaces at startup.
/// Translation failures reported by the backend itself (`code != 200`) are not
/// errors; they travel back to the client as ordinary result text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HcfyError {
    /// Inbound request used a method other than the one the route accepts
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    /// Inbound body could not be decoded as a client request
    #[error("malformed request body: {0}")]
    MalformedRequestBody(String),
    /// The `name` token did not match the configured one
    #[error("authentication mismatch for name {0:?}")]
    AuthenticationMismatch(String),
    /// The backend could not be reached, or its body could not be read
    #[error("backend transport failure: {0}")]
    BackendTransport(String),
    /// The backend replied with something that is not a DeepLX response
    #[error("backend decode failure: {0}")]
    BackendDecode(String),
    /// The client response could not be serialized
    #[error("response encode failure: {0}")]
    ResponseEncode(String),
    /// Missing or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for HcfyError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL may carry a token in its query string
        let err = err.without_url();
        if err.is_decode() {
            HcfyError::BackendDecode(err.to_string())
        } else {
            HcfyError::BackendTransport(err.to_string())
        }
    }
}

/// Result type for adapter operations
pub type HcfyResult<T> = Result<T, HcfyError>;
