//! Personal code parsing errors

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while parsing an Estonian personal code
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersonalCodeError {
    /// Code is not exactly 11 characters long
    #[error("personal code must be 11 digits, got {0} characters")]
    InvalidLength(usize),

    /// Code contains a character that is not a decimal digit
    #[error("personal code must contain only digits")]
    NonNumeric,

    /// First digit does not map to a known century
    #[error("invalid century digit: {0}")]
    InvalidCenturyDigit(u32),

    /// Checksum digit does not match the weighted mod-11 check
    #[error("checksum digit does not match")]
    ChecksumMismatch,

    /// Encoded birth date is not a real calendar date
    #[error("invalid birth date: {year:04}-{month:02}-{day:02}")]
    InvalidBirthDate { year: i32, month: u32, day: u32 },

    /// Encoded birth date lies after the reference date, so no age exists
    #[error("birth date {0} is in the future")]
    BirthDateInFuture(NaiveDate),
}
