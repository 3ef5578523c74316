use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// An error raised when user-supplied weight or height cannot form a valid
/// [`Measurement`](super::Measurement).
///
/// Validation is the only failure path in this model: once a measurement
/// exists, evaluation and classification are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The weight field is missing, non-numeric, or non-positive.
    #[error("invalid weight: {source}")]
    Weight {
        #[source]
        source: ConstraintError,
    },

    /// The height field is missing, non-numeric, or non-positive.
    #[error("invalid height: {source}")]
    Height {
        #[source]
        source: ConstraintError,
    },
}
