//! Age source backed by the Estonian personal-code parser

use personal_code::EstonianPersonalCodeParser;

use crate::ports::{AgeSource, AgeSourceError};

/// [`AgeSource`] that derives ages with [`EstonianPersonalCodeParser`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianAgeSource {
    parser: EstonianPersonalCodeParser,
}

impl EstonianAgeSource {
    /// Creates a new adapter around a fresh parser
    pub fn new() -> Self {
        Self::default()
    }
}

impl AgeSource for EstonianAgeSource {
    fn age_years(&self, personal_code: &str) -> Result<u32, AgeSourceError> {
        self.parser
            .age_years(personal_code)
            .map_err(|e| AgeSourceError::new(e.to_string()))
    }
}
