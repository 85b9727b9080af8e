//! Parser for Estonian personal identification codes
//!
//! Validation runs in order: length, digits-only, century digit, checksum,
//! calendar date. The checksum is the standard weighted mod-11 scheme: a
//! first round over the ten leading digits, a second round with shifted
//! weights when the first yields remainder 10, and a fixed 0 when both do.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PersonalCodeError;

/// Expected length of a personal code, in digits.
const CODE_LENGTH: usize = 11;

/// First-round checksum weights for the ten leading digits.
const CHECKSUM_WEIGHTS_FIRST: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];

/// Second-round weights, used when the first round yields remainder 10.
const CHECKSUM_WEIGHTS_SECOND: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Sex recorded in a personal code's century digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Parser for Estonian personal identification codes.
///
/// Stateless; a single instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianPersonalCodeParser;

impl EstonianPersonalCodeParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Returns true if the code is structurally valid: correct length,
    /// digits only, known century, matching checksum, real calendar date.
    pub fn is_valid(&self, code: &str) -> bool {
        self.birth_date(code).is_ok()
    }

    /// Extracts the birth date encoded in the code.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure encountered, in the order
    /// described in the module docs.
    pub fn birth_date(&self, code: &str) -> Result<NaiveDate, PersonalCodeError> {
        let digits = digits(code)?;
        let century = century_base(digits[0])?;
        verify_checksum(&digits)?;

        let year = century + (digits[1] * 10 + digits[2]) as i32;
        let month = digits[3] * 10 + digits[4];
        let day = digits[5] * 10 + digits[6];

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(PersonalCodeError::InvalidBirthDate { year, month, day })
    }

    /// Extracts the sex encoded in the code's first digit.
    pub fn gender(&self, code: &str) -> Result<Gender, PersonalCodeError> {
        let digits = digits(code)?;
        century_base(digits[0])?;
        verify_checksum(&digits)?;

        if digits[0] % 2 == 1 {
            Ok(Gender::Male)
        } else {
            Ok(Gender::Female)
        }
    }

    /// Age in whole years as of the given reference date.
    ///
    /// The year difference is reduced by one until the birthday has passed;
    /// a Feb 29 birthday counts as passed on Mar 1 of non-leap years.
    pub fn age_years_on(&self, code: &str, on: NaiveDate) -> Result<u32, PersonalCodeError> {
        let birth = self.birth_date(code)?;
        if on < birth {
            return Err(PersonalCodeError::BirthDateInFuture(birth));
        }

        let mut age = on.year() - birth.year();
        if (on.month(), on.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Ok(age as u32)
    }

    /// Age in whole years as of today.
    pub fn age_years(&self, code: &str) -> Result<u32, PersonalCodeError> {
        self.age_years_on(code, Utc::now().date_naive())
    }
}

fn digits(code: &str) -> Result<[u32; CODE_LENGTH], PersonalCodeError> {
    let length = code.chars().count();
    if length != CODE_LENGTH {
        return Err(PersonalCodeError::InvalidLength(length));
    }

    let mut digits = [0u32; CODE_LENGTH];
    for (i, ch) in code.chars().enumerate() {
        digits[i] = ch.to_digit(10).ok_or(PersonalCodeError::NonNumeric)?;
    }
    Ok(digits)
}

/// Maps the century/sex digit to the century's base year.
fn century_base(digit: u32) -> Result<i32, PersonalCodeError> {
    match digit {
        1 | 2 => Ok(1800),
        3 | 4 => Ok(1900),
        5 | 6 => Ok(2000),
        7 | 8 => Ok(2100),
        other => Err(PersonalCodeError::InvalidCenturyDigit(other)),
    }
}

fn verify_checksum(digits: &[u32; CODE_LENGTH]) -> Result<(), PersonalCodeError> {
    if digits[CODE_LENGTH - 1] != checksum(&digits[..CODE_LENGTH - 1]) {
        return Err(PersonalCodeError::ChecksumMismatch);
    }
    Ok(())
}

fn checksum(leading: &[u32]) -> u32 {
    let weighted = |weights: [u32; 10]| {
        leading
            .iter()
            .zip(weights)
            .map(|(d, w)| d * w)
            .sum::<u32>()
            % 11
    };

    let first = weighted(CHECKSUM_WEIGHTS_FIRST);
    if first < 10 {
        return first;
    }
    let second = weighted(CHECKSUM_WEIGHTS_SECOND);
    if second < 10 {
        second
    } else {
        0
    }
}
