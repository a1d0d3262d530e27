use std::fmt;

use thiserror::Error;

/// Which remote call a lookup failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocode,
    Weather,
}

impl fmt::Display for Stage {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Stage::Geocode => f.write_str("geocoding"),
            Stage::Weather => f.write_str("weather"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The postal code was empty or malformed; no request was made.
    #[error("invalid postal code: {0}")]
    InvalidInput(String),

    /// A remote service was unreachable, returned an error, or returned no usable data.
    #[error("{stage} service unavailable: {reason}")]
    UpstreamUnavailable { stage: Stage, reason: String },

    /// The HTTP client could not be built from the given settings.
    #[error("weather client configuration error: {0}")]
    Configuration(String),
}

impl LookupError {
    pub fn upstream(
        stage: Stage,
        reason: impl Into<String>,
    ) -> Self {
        LookupError::UpstreamUnavailable {
            stage,
            reason: reason.into(),
        }
    }
}
