//! Decision domain ports
//!
//! The eligibility rules consume applicant data through narrow capability
//! interfaces so they stay independently testable with fakes, and so the
//! concrete personal-code library can be swapped without touching the
//! rules themselves.
//!
//! Unlike the database-backed ports elsewhere in the stack, parsing a
//! personal code is pure computation; the port is synchronous.

use thiserror::Error;

/// Error reported by an [`AgeSource`] when a personal code yields no age.
///
/// Carries the underlying parser's message; the decision layer treats it
/// as opaque.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AgeSourceError {
    message: String,
}

impl AgeSourceError {
    /// Creates an error from the underlying parser's message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability for deriving an applicant's age from a national personal code.
pub trait AgeSource: Send + Sync {
    /// Returns the applicant's age in whole years.
    ///
    /// # Errors
    ///
    /// Fails when the code is malformed or encodes no derivable age. The
    /// failure is terminal for the given input; callers do not retry.
    fn age_years(&self, personal_code: &str) -> Result<u32, AgeSourceError>;
}

/// In-memory [`AgeSource`] for testing without a real parser.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;

    /// Maps personal codes to fixed ages; unknown codes fail like a parser.
    #[derive(Debug, Default)]
    pub struct MockAgeSource {
        ages: HashMap<String, u32>,
    }

    impl MockAgeSource {
        /// Creates an empty mock source
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the source with a code-to-age mapping
        pub fn with_age(mut self, personal_code: impl Into<String>, age: u32) -> Self {
            self.ages.insert(personal_code.into(), age);
            self
        }
    }

    impl AgeSource for MockAgeSource {
        fn age_years(&self, personal_code: &str) -> Result<u32, AgeSourceError> {
            self.ages.get(personal_code).copied().ok_or_else(|| {
                AgeSourceError::new(format!("unknown personal code: {}", personal_code))
            })
        }
    }
}
