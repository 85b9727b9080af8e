//! Decision domain errors

use thiserror::Error;

/// Errors raised by the age eligibility check
#[derive(Debug, Error)]
pub enum AgeRestrictionError {
    /// The personal code could not be parsed into an age
    #[error("invalid personal code: {detail}")]
    InvalidCode {
        /// Message from the underlying parser
        detail: String,
    },

    /// Parsed age falls outside the eligible range
    ///
    /// Too-young and too-old applicants are deliberately not distinguished;
    /// callers see one combined rejection.
    #[error("loan not allowed due to age restrictions")]
    AgeOutOfRange,
}

impl AgeRestrictionError {
    /// Creates an InvalidCode error carrying the parser's message
    pub fn invalid_code(detail: impl Into<String>) -> Self {
        AgeRestrictionError::InvalidCode {
            detail: detail.into(),
        }
    }

    /// Returns true if the failure came from an unparseable code
    pub fn is_invalid_code(&self) -> bool {
        matches!(self, AgeRestrictionError::InvalidCode { .. })
    }

    /// Returns true if the failure came from the age comparison
    pub fn is_age_out_of_range(&self) -> bool {
        matches!(self, AgeRestrictionError::AgeOutOfRange)
    }
}
