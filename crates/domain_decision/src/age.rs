//! Age eligibility check
//!
//! The single rule implemented here: an applicant must be an adult, and
//! young enough that a loan running its full maximum period stays within
//! their country's expected lifetime.

use tracing::debug;

use crate::adapters::EstonianAgeSource;
use crate::config::{DecisionConfig, MINIMUM_APPLICANT_AGE};
use crate::country::{CountryResolver, FixedCountryResolver};
use crate::error::AgeRestrictionError;
use crate::ports::AgeSource;

/// Validates that an applicant's age permits the requested loan.
///
/// Generic over its collaborators so the rules can be exercised with fakes;
/// the defaults are the production pair: the Estonian personal-code parser
/// and the fixed-country stub.
///
/// # Examples
///
/// ```rust
/// use domain_decision::{AgeValidator, DecisionConfig};
///
/// let validator = AgeValidator::new(DecisionConfig::default());
/// assert!(validator.validate("37605030299").is_ok());
/// assert!(validator.validate("not-a-code!").is_err());
/// ```
pub struct AgeValidator<S = EstonianAgeSource, R = FixedCountryResolver> {
    age_source: S,
    country_resolver: R,
    config: DecisionConfig,
}

impl AgeValidator {
    /// Creates a validator backed by the Estonian personal-code parser and
    /// the fixed default country.
    pub fn new(config: DecisionConfig) -> Self {
        Self::with_parts(
            EstonianAgeSource::new(),
            FixedCountryResolver::default(),
            config,
        )
    }
}

impl<S: AgeSource, R: CountryResolver> AgeValidator<S, R> {
    /// Creates a validator from explicit collaborators.
    pub fn with_parts(age_source: S, country_resolver: R, config: DecisionConfig) -> Self {
        Self {
            age_source,
            country_resolver,
            config,
        }
    }

    /// Checks the applicant behind `personal_code` against the age rules.
    ///
    /// # Errors
    ///
    /// Returns [`AgeRestrictionError::InvalidCode`] when no age can be
    /// derived from the code, and [`AgeRestrictionError::AgeOutOfRange`]
    /// when the applicant is under 18 or older than the country's life
    /// expectancy minus the maximum loan period.
    pub fn validate(&self, personal_code: &str) -> Result<(), AgeRestrictionError> {
        let age = self
            .age_source
            .age_years(personal_code)
            .map_err(|e| AgeRestrictionError::invalid_code(e.to_string()))?;

        let country = self.country_resolver.resolve(personal_code);
        let maximum_age = self.config.maximum_applicant_age(country);

        if age < MINIMUM_APPLICANT_AGE || age > maximum_age {
            debug!(age, maximum_age, ?country, "applicant age outside eligible range");
            return Err(AgeRestrictionError::AgeOutOfRange);
        }

        Ok(())
    }
}
