// SPDX-License-Identifier: MPL-2.0
//! Errors returned by the enhancement service client.

use std::fmt;

/// Message used when the server fails without a `detail` field.
pub const SERVER_ERROR_FALLBACK: &str = "Server error";

/// Message used for every transport-level failure.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Network connection failed";

/// Failure of a single call to the enhancement service.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    Server {
        status: u16,
        /// The server's `detail` field, or [`SERVER_ERROR_FALLBACK`].
        message: String,
    },

    /// The server answered with success but the body is not the expected
    /// JSON document.
    MalformedResponse(String),

    /// DNS failure, refused connection, broken stream, or a client that
    /// could not be built.
    Transport(String),
}

impl ApiError {
    /// Returns the uniform user-facing error string for this failure.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Server { message, .. } => message,
            ApiError::MalformedResponse(_) => SERVER_ERROR_FALLBACK,
            ApiError::Transport(_) => TRANSPORT_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server { status, message } => {
                write!(f, "Server error (HTTP {status}): {message}")
            }
            ApiError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
            ApiError::Transport(msg) => write!(f, "Could not connect: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_uses_detail_as_user_message() {
        let err = ApiError::Server {
            status: 400,
            message: "File size exceeds the 10MB limit.".to_string(),
        };
        assert_eq!(err.user_message(), "File size exceeds the 10MB limit.");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn transport_errors_share_one_message() {
        let refused = ApiError::Transport("connection refused".into());
        let dns = ApiError::Transport("dns error".into());
        assert_eq!(refused.user_message(), dns.user_message());
        assert_eq!(refused.user_message(), TRANSPORT_ERROR_MESSAGE);
    }

    #[test]
    fn malformed_response_falls_back_to_generic_message() {
        let err = ApiError::MalformedResponse("expected value".into());
        assert_eq!(err.user_message(), SERVER_ERROR_FALLBACK);
    }
}
