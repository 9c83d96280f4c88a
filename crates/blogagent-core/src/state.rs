//! Submission lifecycle state.
//!
//! Exactly one [`UiState`] variant holds at any time, and every
//! transition is driven by the submit action: `begin` moves to Loading
//! (discarding any prior outcome), `resolve` settles Loading into
//! Succeeded or Failed.

use serde::{Deserialize, Serialize};

/// A successful generation outcome: the markdown content to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub content: String,
}

impl GenerationResult {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A failed generation outcome: the message to surface to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationError {
    pub message: String,
}

impl GenerationError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The mutually exclusive display states of the generation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Succeeded(GenerationResult),
    Failed(GenerationError),
}

impl UiState {
    /// Start a new submission. Any previous result or error is discarded.
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Settle an in-flight submission with its outcome.
    ///
    /// Valid only from Loading; a resolve in any other state is logged
    /// and ignored (it belongs to a submission that no longer exists).
    pub fn resolve(&mut self, outcome: Result<GenerationResult, GenerationError>) {
        if *self != Self::Loading {
            log::warn!("ignoring resolve outside Loading state");
            return;
        }
        *self = match outcome {
            Ok(result) => Self::Succeeded(result),
            Err(error) => Self::Failed(error),
        };
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The markdown content, when the last submission succeeded.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Succeeded(result) => Some(&result.content),
            _ => None,
        }
    }

    /// The error message, when the last submission failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(error) => Some(&error.message),
            _ => None,
        }
    }
}
