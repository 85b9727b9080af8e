//! Estonian personal identification code parsing
//!
//! An Estonian personal code (isikukood) is an 11-digit string in the
//! format `GYYMMDDSSSC`: a combined century/sex digit, a six-digit birth
//! date, a three-digit serial number, and a mod-11 checksum digit. This
//! crate derives the data a loan-decision workflow needs from such a code:
//! the birth date, the applicant's sex, and the age in whole years.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use personal_code::EstonianPersonalCodeParser;
//!
//! let parser = EstonianPersonalCodeParser::new();
//!
//! let birth = parser.birth_date("37605030299").unwrap();
//! assert_eq!(birth, NaiveDate::from_ymd_opt(1976, 5, 3).unwrap());
//!
//! let on = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
//! assert_eq!(parser.age_years_on("37605030299", on).unwrap(), 48);
//! ```

pub mod error;
pub mod parser;

pub use error::PersonalCodeError;
pub use parser::{EstonianPersonalCodeParser, Gender};
