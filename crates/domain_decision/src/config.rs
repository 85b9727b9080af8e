//! Decision engine constants
//!
//! Loaded once at process start and read-only afterwards. Every field has
//! a compiled-in default and can be overridden from the environment with
//! the `DECISION_` prefix, e.g. `DECISION_MAXIMUM_LOAN_PERIOD_YEARS=10`.

use serde::Deserialize;

use crate::country::Country;

/// Youngest age, in whole years, at which a loan can be granted.
pub const MINIMUM_APPLICANT_AGE: u32 = 18;

/// Numeric constants driving the loan decision rules.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionConfig {
    /// Longest loan period offered, in years
    #[serde(default = "default_maximum_loan_period_years")]
    pub maximum_loan_period_years: u32,
    /// Expected lifetime for Estonian applicants, in years
    #[serde(default = "default_estonia_life_expectancy")]
    pub estonia_life_expectancy: u32,
    /// Expected lifetime for Latvian applicants, in years
    #[serde(default = "default_latvia_life_expectancy")]
    pub latvia_life_expectancy: u32,
    /// Expected lifetime for Lithuanian applicants, in years
    #[serde(default = "default_lithuania_life_expectancy")]
    pub lithuania_life_expectancy: u32,
}

fn default_maximum_loan_period_years() -> u32 {
    5
}

fn default_estonia_life_expectancy() -> u32 {
    80
}

fn default_latvia_life_expectancy() -> u32 {
    75
}

fn default_lithuania_life_expectancy() -> u32 {
    76
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            maximum_loan_period_years: default_maximum_loan_period_years(),
            estonia_life_expectancy: default_estonia_life_expectancy(),
            latvia_life_expectancy: default_latvia_life_expectancy(),
            lithuania_life_expectancy: default_lithuania_life_expectancy(),
        }
    }
}

impl DecisionConfig {
    /// Loads configuration from the environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("DECISION").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Life-expectancy constant for the given country.
    pub fn life_expectancy(&self, country: Country) -> u32 {
        match country {
            Country::Estonia => self.estonia_life_expectancy,
            Country::Latvia => self.latvia_life_expectancy,
            Country::Lithuania => self.lithuania_life_expectancy,
        }
    }

    /// Oldest eligible applicant age for the given country.
    ///
    /// Derived as life expectancy minus the maximum loan period, so a loan
    /// running its full term stays within the expected lifetime.
    pub fn maximum_applicant_age(&self, country: Country) -> u32 {
        self.life_expectancy(country)
            .saturating_sub(self.maximum_loan_period_years)
    }
}
