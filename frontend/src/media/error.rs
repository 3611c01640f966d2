use thiserror::Error;

/// Errors raised while observing media conditions.
///
/// Only [`MediaError::Descriptor`] ever reaches a component. A missing
/// facility is absorbed by the observer and reported as "no match".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The condition string is not a media predicate we understand.
    #[error("invalid media condition `{condition}`: {reason}")]
    Descriptor { condition: String, reason: String },

    /// The host has no matching facility right now (before mount, after teardown).
    #[error("media matching facility is unavailable")]
    FacilityUnavailable,
}

impl MediaError {
    pub fn descriptor(condition: impl Into<String>, reason: impl Into<String>) -> Self {
        MediaError::Descriptor {
            condition: condition.into(),
            reason: reason.into(),
        }
    }

    /// Short stable label for log lines.
    pub fn as_label(&self) -> &'static str {
        match self {
            MediaError::Descriptor { .. } => "media_descriptor",
            MediaError::FacilityUnavailable => "media_facility_unavailable",
        }
    }
}
