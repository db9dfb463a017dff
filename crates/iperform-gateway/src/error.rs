use std::fmt;

/// Error type for calls to the inference service.
///
/// Materialize callers recover from these by substituting the fallback
/// dataset; mutate callers must surface them, because a swallowed failure
/// would make the user's action look applied when it was not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never completed (DNS, connect, timeout, TLS).
    Transport(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The service answered success but with no usable candidate text.
    EmptyResponse,
    /// The reply text could not be reduced to a JSON document.
    MalformedResponse(String),
    /// The outbound state document could not be serialized.
    Encode(String),
}

impl std::error::Error for GatewayError {}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "inference request failed: {}", msg),
            Self::Api { status, message } => {
                write!(f, "inference service error {}: {}", status, message)
            }
            Self::EmptyResponse => write!(f, "inference service returned an empty reply"),
            Self::MalformedResponse(msg) => {
                write!(f, "inference reply was not valid JSON: {}", msg)
            }
            Self::Encode(msg) => write!(f, "failed to encode current state: {}", msg),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
