//! Behavioral tests for personal_code

use chrono::NaiveDate;
use personal_code::{EstonianPersonalCodeParser, Gender, PersonalCodeError};

fn parser() -> EstonianPersonalCodeParser {
    EstonianPersonalCodeParser::new()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ============================================================================
// Birth date extraction
// ============================================================================

mod birth_dates {
    use super::*;

    #[test]
    fn test_birth_date_1900s_male() {
        assert_eq!(
            parser().birth_date("37605030299").unwrap(),
            date(1976, 5, 3)
        );
    }

    #[test]
    fn test_birth_date_1900s_female() {
        assert_eq!(
            parser().birth_date("49001011238").unwrap(),
            date(1990, 1, 1)
        );
    }

    #[test]
    fn test_birth_date_1800s() {
        assert_eq!(
            parser().birth_date("26306300016").unwrap(),
            date(1863, 6, 30)
        );
    }

    #[test]
    fn test_birth_date_2000s() {
        assert_eq!(
            parser().birth_date("60501010022").unwrap(),
            date(2005, 1, 1)
        );
    }

    #[test]
    fn test_birth_date_leap_day() {
        assert_eq!(
            parser().birth_date("60002290014").unwrap(),
            date(2000, 2, 29)
        );
    }

    #[test]
    fn test_birth_date_second_checksum_round() {
        // First checksum round leaves remainder 10; the second round decides.
        assert_eq!(
            parser().birth_date("51107121760").unwrap(),
            date(2011, 7, 12)
        );
    }

    #[test]
    fn test_birth_date_double_remainder_checksum() {
        // Both checksum rounds leave remainder 10; the check digit is 0.
        assert_eq!(
            parser().birth_date("37605030920").unwrap(),
            date(1976, 5, 3)
        );
    }
}

// ============================================================================
// Rejections
// ============================================================================

mod rejections {
    use super::*;

    #[test]
    fn test_too_short() {
        assert_eq!(
            parser().birth_date("3760503029"),
            Err(PersonalCodeError::InvalidLength(10))
        );
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            parser().birth_date("376050302999"),
            Err(PersonalCodeError::InvalidLength(12))
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            parser().birth_date(""),
            Err(PersonalCodeError::InvalidLength(0))
        );
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(
            parser().birth_date("3760503029x"),
            Err(PersonalCodeError::NonNumeric)
        );
    }

    #[test]
    fn test_unknown_century_digit() {
        assert_eq!(
            parser().birth_date("90001010000"),
            Err(PersonalCodeError::InvalidCenturyDigit(9))
        );
        assert_eq!(
            parser().birth_date("00001010000"),
            Err(PersonalCodeError::InvalidCenturyDigit(0))
        );
    }

    #[test]
    fn test_checksum_mismatch() {
        assert_eq!(
            parser().birth_date("37605030298"),
            Err(PersonalCodeError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_month_out_of_range() {
        // Checksum is valid for this code; only the date is impossible.
        assert_eq!(
            parser().birth_date("37613030293"),
            Err(PersonalCodeError::InvalidBirthDate {
                year: 1976,
                month: 13,
                day: 3
            })
        );
    }

    #[test]
    fn test_leap_day_in_non_leap_year() {
        assert_eq!(
            parser().birth_date("50202290019"),
            Err(PersonalCodeError::InvalidBirthDate {
                year: 2002,
                month: 2,
                day: 29
            })
        );
    }
}

// ============================================================================
// Sex derivation
// ============================================================================

mod genders {
    use super::*;

    #[test]
    fn test_odd_century_digit_is_male() {
        assert_eq!(parser().gender("37605030299").unwrap(), Gender::Male);
        assert_eq!(parser().gender("51107121760").unwrap(), Gender::Male);
    }

    #[test]
    fn test_even_century_digit_is_female() {
        assert_eq!(parser().gender("49001011238").unwrap(), Gender::Female);
        assert_eq!(parser().gender("60501010022").unwrap(), Gender::Female);
    }

    #[test]
    fn test_gender_still_validates_the_code() {
        assert_eq!(
            parser().gender("49001011237"),
            Err(PersonalCodeError::ChecksumMismatch)
        );
    }
}

// ============================================================================
// Age derivation
// ============================================================================

mod ages {
    use super::*;

    #[test]
    fn test_age_on_birthday() {
        let age = parser()
            .age_years_on("37605030299", date(2024, 5, 3))
            .unwrap();
        assert_eq!(age, 48);
    }

    #[test]
    fn test_age_day_before_birthday() {
        let age = parser()
            .age_years_on("37605030299", date(2024, 5, 2))
            .unwrap();
        assert_eq!(age, 47);
    }

    #[test]
    fn test_age_on_birth_date_is_zero() {
        let age = parser()
            .age_years_on("60002290014", date(2000, 2, 29))
            .unwrap();
        assert_eq!(age, 0);
    }

    #[test]
    fn test_leap_day_birthday_not_reached_on_feb_28() {
        let age = parser()
            .age_years_on("60002290014", date(2023, 2, 28))
            .unwrap();
        assert_eq!(age, 22);
    }

    #[test]
    fn test_leap_day_birthday_passed_on_mar_1() {
        let age = parser()
            .age_years_on("60002290014", date(2023, 3, 1))
            .unwrap();
        assert_eq!(age, 23);
    }

    #[test]
    fn test_birth_date_after_reference_date() {
        // 2100s codes parse, but no age exists before the birth date.
        assert_eq!(
            parser().age_years_on("71501010014", date(2026, 1, 1)),
            Err(PersonalCodeError::BirthDateInFuture(date(2115, 1, 1)))
        );
    }

    #[test]
    fn test_age_as_of_today() {
        // Born 1976; the exact value depends on the current date.
        let age = parser().age_years("37605030299").unwrap();
        assert!(age >= 48);
    }
}

// ============================================================================
// Structural validity
// ============================================================================

mod validity {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(parser().is_valid("37605030299"));
        assert!(parser().is_valid("51107121760"));
        assert!(!parser().is_valid("37605030298"));
        assert!(!parser().is_valid("not-a-code!"));
        assert!(!parser().is_valid(""));
    }
}
