//! Core domain model for blogagent.
//!
//! This crate defines the generation form data model (form input, the
//! tone vocabulary, the wire request), the UI state machine that tracks
//! a submission's lifecycle, the line-oriented markdown block model used
//! for rendering, and deterministic demo content fabrication.
//!
//! No I/O happens here; the HTTP client lives in `blogagent-client` and
//! the terminal UI in `blogagent-cli`.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod demo;
pub mod error;
pub mod form;
pub mod markdown;
pub mod state;
pub mod tone;

pub use error::{Error, Result};
pub use form::{FormInput, GenerateRequest};
pub use state::{GenerationError, GenerationResult, UiState};
pub use tone::Tone;
