//! Loan Decision Domain
//!
//! This crate implements the applicant-eligibility fragment of the loan
//! decision engine. The rule it carries is the age restriction: derive the
//! applicant's age from their national personal code, then reject them if
//! they are under 18 or older than their country's life expectancy minus
//! the maximum loan period.
//!
//! Age derivation is consumed through the [`AgeSource`] port (backed in
//! production by the Estonian personal-code parser), and the applicant's
//! country comes from a [`CountryResolver`] strategy whose only current
//! implementation is a documented fixed-default stub.
//!
//! # Examples
//!
//! ```rust
//! use domain_decision::{AgeValidator, DecisionConfig};
//!
//! let validator = AgeValidator::new(DecisionConfig::default());
//!
//! // Applicant born 1976-05-03: well inside the eligible range.
//! assert!(validator.validate("37605030299").is_ok());
//!
//! // Malformed codes are rejected before any age comparison.
//! let err = validator.validate("123").unwrap_err();
//! assert!(err.is_invalid_code());
//! ```

pub mod adapters;
pub mod age;
pub mod config;
pub mod country;
pub mod error;
pub mod ports;

pub use adapters::EstonianAgeSource;
pub use age::AgeValidator;
pub use config::{DecisionConfig, MINIMUM_APPLICANT_AGE};
pub use country::{Country, CountryResolver, FixedCountryResolver};
pub use error::AgeRestrictionError;
pub use ports::{AgeSource, AgeSourceError};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockAgeSource;
