//! Error type for API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes of a REST call.
///
/// `Status` carries the server-provided `message` body field when the
/// response had one, otherwise the HTTP status text; pages surface it in a
/// dismissible notification rather than crashing anything.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("{message} (status {code})")]
    Status { code: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The human-readable message the server sent alongside an error
    /// status, if that is what this error is.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
