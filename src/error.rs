// =============================================================================
// Error types
// =============================================================================
//
// Only malformed input is an error. Insufficient history is expressed as
// `None` by each indicator and never reaches this module.

use thiserror::Error;

/// A raw bar record could not be turned into a numeric [`crate::types::Bar`].
///
/// Any of these aborts the whole computation; no partial report is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedBarError {
    /// The top-level input document is not a JSON array of bars.
    #[error("bar input must be a JSON array, got {found}")]
    NotAnArray { found: &'static str },

    /// A bar is neither a kline row (array) nor a bar object.
    #[error("bar {index}: unsupported record shape ({found})")]
    UnsupportedShape { index: usize, found: &'static str },

    /// A required field is absent or null.
    #[error("bar {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A field is present but cannot be coerced to a number.
    #[error("bar {index}: field `{field}` is not numeric: {value}")]
    NotNumeric {
        index: usize,
        field: &'static str,
        value: String,
    },

    /// A field coerced to NaN or infinity.
    #[error("bar {index}: field `{field}` is not a finite number")]
    NonFinite { index: usize, field: &'static str },
}

impl MalformedBarError {
    /// Index of the offending bar, when the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::NotAnArray { .. } => None,
            Self::UnsupportedShape { index, .. }
            | Self::MissingField { index, .. }
            | Self::NotNumeric { index, .. }
            | Self::NonFinite { index, .. } => Some(*index),
        }
    }
}
