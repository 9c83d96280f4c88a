//! Error taxonomy for generation requests.
//!
//! The three failure classes the form distinguishes are validation
//! (rejected before any request is made), transport (the request never
//! completed), and application (the backend answered but reported an
//! error). Each maps to its own variant so the UI can never mistake a
//! failure for success.

use thiserror::Error;

/// Errors that can occur while submitting a generation request.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The form input failed validation; no request was issued.
    #[error("{0}")]
    Validation(#[from] blogagent_core::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The request could not be sent or the connection failed.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned {code}: {message}")]
    Status { code: u16, message: String },

    /// The backend answered 2xx but reported an error in the body.
    #[error("{message}")]
    Application { message: String },

    /// The response body could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },
}

impl GenerateError {
    /// Returns `true` when the error is transient and a later retry may
    /// succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Transport { .. })
    }

    /// Returns `true` when the backend itself reported the failure.
    pub fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Convenience alias for generation results.
pub type GenerateResult<T> = std::result::Result<T, GenerateError>;
