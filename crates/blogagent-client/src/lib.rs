//! Generation backend client for blogagent.
//!
//! Wraps the single outbound HTTP call (`POST /api/generate_blog`),
//! maps transport, status, and application-level failures into a
//! distinct error taxonomy, and loads the tool's configuration.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod error;

pub use client::GenerationClient;
pub use config::Config;
pub use error::{GenerateError, GenerateResult};
