//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual form of a birthday, both accepted and rendered.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Two-digit day, two-digit month, four-digit year.
///
/// chrono alone would also accept `1.2.2020`; the shape check keeps the
/// stored form and the rendered form identical.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Parsed from `DD.MM.YYYY` and held as a [`NaiveDate`]; displays back in
/// the same form regardless of locale.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// assert!(Birthday::new("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the value has the
    /// wrong shape or names a date that does not exist (`31.02.2020`,
    /// `00.01.2000`).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !BIRTHDAY_SHAPE.is_match(&value) {
            return Err(ValidationError::InvalidBirthday(value));
        }

        match NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    /// The date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day this birthday falls on in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    }

    #[test]
    fn test_birthday_round_trips_text() {
        for text in ["01.01.2000", "29.02.2024", "31.12.1899"] {
            assert_eq!(Birthday::new(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2020").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("01.13.2000").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
    }

    #[test]
    fn test_birthday_rejects_wrong_shape() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.2.2020").is_err());
        assert!(Birthday::new("01.02.20").is_err());
        assert!(Birthday::new("2020-02-01").is_err());
        assert!(Birthday::new("aa.bb.cccc").is_err());
        assert!(Birthday::new(" 01.02.2020").is_err());
        assert!(Birthday::new("01.02.2020x").is_err());
    }

    #[test]
    fn test_birthday_error_variant() {
        let err = Birthday::new("31.02.2020").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("31.02.2020".to_string()));
    }

    #[test]
    fn test_occurrence_in_other_year() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn test_leap_day_occurrence_clamps_to_feb_28() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(
            birthday.occurrence_in(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("05.11.1985").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.11.1985\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"31.02.2020\"");
        assert!(result.is_err());
    }
}
