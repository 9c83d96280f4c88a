use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tone::Tone;

/// The raw form fields as the user typed them.
///
/// Mutated continuously by edits; only [`FormInput::to_request`] applies
/// trimming and the tone default, so the buffers always reflect what the
/// user sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    /// Blog post title. Required; must be non-blank to submit.
    pub title: String,
    /// Free-text keywords, typically comma separated. Optional.
    pub keywords: String,
    /// Selected tone, if the user picked one.
    pub tone: Option<Tone>,
}

impl FormInput {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            keywords: String::new(),
            tone: None,
        }
    }

    /// Checks the submission precondition: a non-blank title.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }
        Ok(())
    }

    /// Builds the wire request, trimming the text fields and substituting
    /// `neutral` when no tone was selected.
    pub fn to_request(&self) -> Result<GenerateRequest> {
        self.validate()?;
        Ok(GenerateRequest {
            title: self.title.trim().to_string(),
            keywords: self.keywords.trim().to_string(),
            tone: self.tone.unwrap_or_default(),
        })
    }
}

/// The JSON body POSTed to `/api/generate_blog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub title: String,
    pub keywords: String,
    pub tone: Tone,
}
