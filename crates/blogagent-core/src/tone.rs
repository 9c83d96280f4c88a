use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed vocabulary of writing tones a generation request may carry.
///
/// Advisory only: the backend is free to interpret (or ignore) the tone.
/// An unset tone defaults to [`Tone::Neutral`] at submission time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Casual,
    Professional,
    Enthusiastic,
    Authoritative,
    Friendly,
}

/// All tones, in the order the form cycles through them.
pub const ALL_TONES: [Tone; 6] = [
    Tone::Neutral,
    Tone::Casual,
    Tone::Professional,
    Tone::Enthusiastic,
    Tone::Authoritative,
    Tone::Friendly,
];

impl Tone {
    /// The lowercase wire label for this tone.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Casual => "casual",
            Self::Professional => "professional",
            Self::Enthusiastic => "enthusiastic",
            Self::Authoritative => "authoritative",
            Self::Friendly => "friendly",
        }
    }

    /// Display label with an uppercase first letter (e.g. "Professional").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Casual => "Casual",
            Self::Professional => "Professional",
            Self::Enthusiastic => "Enthusiastic",
            Self::Authoritative => "Authoritative",
            Self::Friendly => "Friendly",
        }
    }

    /// The next tone in the cycle, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = ALL_TONES.iter().position(|t| *t == self).unwrap_or(0);
        ALL_TONES[(idx + 1) % ALL_TONES.len()]
    }

    /// The previous tone in the cycle, wrapping at the start.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = ALL_TONES.iter().position(|t| *t == self).unwrap_or(0);
        ALL_TONES[(idx + ALL_TONES.len() - 1) % ALL_TONES.len()]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neutral" => Ok(Self::Neutral),
            "casual" => Ok(Self::Casual),
            "professional" => Ok(Self::Professional),
            "enthusiastic" => Ok(Self::Enthusiastic),
            "authoritative" => Ok(Self::Authoritative),
            "friendly" => Ok(Self::Friendly),
            other => Err(Error::UnknownTone(other.to_string())),
        }
    }
}
