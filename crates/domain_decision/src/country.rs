//! Country resolution for applicants
//!
//! Life-expectancy constants are kept per country, but detecting an
//! applicant's country from their personal code is not implemented: the
//! Baltic codes share one format, and every applicant currently resolves
//! to the configured default. The strategy sits behind a trait so real
//! detection can replace the stub without touching the eligibility rules.

use serde::{Deserialize, Serialize};

/// Countries the decision engine holds life-expectancy figures for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    Estonia,
    Latvia,
    Lithuania,
}

/// Strategy for determining which country an applicant belongs to.
pub trait CountryResolver: Send + Sync {
    /// Resolves the country for the given personal code.
    fn resolve(&self, personal_code: &str) -> Country;
}

/// Resolver that assigns every applicant to one fixed country.
///
/// This is a known simplification, not country detection: the personal
/// code is ignored and the configured default (Estonia unless stated
/// otherwise) is returned for all inputs.
// TODO: resolve the country from application metadata or a code prefix
// once more than one Baltic market is onboarded.
#[derive(Debug, Clone, Copy)]
pub struct FixedCountryResolver {
    country: Country,
}

impl FixedCountryResolver {
    /// Creates a resolver pinned to the given country
    pub fn new(country: Country) -> Self {
        Self { country }
    }
}

impl Default for FixedCountryResolver {
    fn default() -> Self {
        Self::new(Country::Estonia)
    }
}

impl CountryResolver for FixedCountryResolver {
    fn resolve(&self, _personal_code: &str) -> Country {
        self.country
    }
}
