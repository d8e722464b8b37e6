//! Birth-date input validation.
//!
//! Failures are reported as per-field data rather than raised: the caller
//! gets either a constructed date or one message per offending field,
//! ready to show next to the inputs.

use chrono::{Datelike, NaiveDate};

/// Earliest accepted birth year.
pub const MIN_YEAR: i32 = 1900;

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Value absent or non-numeric.
    MissingField,
    /// Out of range, impossible calendar date, or future-dated.
    InvalidValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// At most one error per input field. A later check overwrites an earlier
/// message for the same field: the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub day: Option<FieldError>,
    pub month: Option<FieldError>,
    pub year: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// (field name, error) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FieldError)> {
        [("day", self.day), ("month", self.month), ("year", self.year)]
            .into_iter()
            .filter_map(|(name, err)| err.map(|e| (name, e)))
    }
}

fn missing(message: &'static str) -> Option<FieldError> {
    Some(FieldError {
        kind: ErrorKind::MissingField,
        message,
    })
}

fn invalid(message: &'static str) -> Option<FieldError> {
    Some(FieldError {
        kind: ErrorKind::InvalidValue,
        message,
    })
}

/// Validate raw day/month/year input against `today`.
///
/// `None` fields are ones the caller could not parse as numbers. The date
/// is only constructed once every field passes its own range check.
pub fn validate(
    day: Option<i32>,
    month: Option<i32>,
    year: Option<i32>,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    match day {
        None => errors.day = missing("Day is required"),
        Some(d) if !(1..=31).contains(&d) => {
            errors.day = invalid("Day must be between 1-31");
        }
        Some(_) => {}
    }

    match month {
        None => errors.month = missing("Month is required"),
        Some(m) if !(1..=12).contains(&m) => {
            errors.month = invalid("Invalid month");
        }
        Some(_) => {}
    }

    match year {
        None => errors.year = missing("Year is required"),
        Some(y) if y < MIN_YEAR => {
            errors.year = invalid("Year must be after 1900");
        }
        Some(y) if y > today.year() => {
            errors.year = invalid("Year cannot be in the future");
        }
        Some(_) => {}
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let (Some(d), Some(m), Some(y)) = (day, month, year) else {
        return Err(errors);
    };

    let Some(date) = NaiveDate::from_ymd_opt(y, m as u32, d as u32) else {
        errors.day = invalid("Invalid date for this month");
        return Err(errors);
    };

    if y == today.year() && m == today.month() as i32 && d > today.day() as i32 {
        errors.day = invalid("Date cannot be in the future");
    } else if y == today.year() && m > today.month() as i32 {
        errors.month = invalid("Date cannot be in the future");
    }

    // Overlaps with the same-year branch above on purpose; running last
    // means its message is the one left on the day field.
    if date > today {
        errors.day = invalid("Birth date cannot be in the future");
    }

    if errors.is_empty() { Ok(date) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn message_of(err: Option<FieldError>) -> &'static str {
        err.expect("expected a field error").message
    }

    #[test]
    fn missing_fields_are_required() {
        let errors = validate(None, None, None, today()).unwrap_err();
        assert_eq!(message_of(errors.day), "Day is required");
        assert_eq!(message_of(errors.month), "Month is required");
        assert_eq!(message_of(errors.year), "Year is required");
        assert!(errors.iter().all(|(_, e)| e.kind == ErrorKind::MissingField));
    }

    #[test]
    fn out_of_range_fields() {
        let errors = validate(Some(32), Some(0), Some(1899), today()).unwrap_err();
        assert_eq!(message_of(errors.day), "Day must be between 1-31");
        assert_eq!(message_of(errors.month), "Invalid month");
        assert_eq!(message_of(errors.year), "Year must be after 1900");
        assert!(errors.iter().all(|(_, e)| e.kind == ErrorKind::InvalidValue));
    }

    #[test]
    fn future_year() {
        let errors = validate(Some(1), Some(1), Some(2100), today()).unwrap_err();
        assert_eq!(message_of(errors.year), "Year cannot be in the future");
        assert!(errors.day.is_none());
        assert!(errors.month.is_none());
    }

    #[test]
    fn impossible_day_for_month() {
        let errors = validate(Some(31), Some(2), Some(2023), today()).unwrap_err();
        assert_eq!(message_of(errors.day), "Invalid date for this month");

        let errors = validate(Some(31), Some(4), Some(2020), today()).unwrap_err();
        assert_eq!(message_of(errors.day), "Invalid date for this month");
    }

    #[test]
    fn range_failures_skip_date_construction() {
        // Month is out of range, so day 31 is never tested against a month.
        let errors = validate(Some(31), Some(13), Some(2020), today()).unwrap_err();
        assert!(errors.day.is_none());
        assert_eq!(message_of(errors.month), "Invalid month");
    }

    #[test]
    fn future_day_in_current_month_last_write_wins() {
        // Both the same-month check and the general future check hit the
        // day field; the general one runs last and keeps it.
        let errors = validate(Some(25), Some(5), Some(2024), today()).unwrap_err();
        assert_eq!(
            message_of(errors.day),
            "Birth date cannot be in the future"
        );
    }

    #[test]
    fn future_month_in_current_year() {
        let errors = validate(Some(1), Some(6), Some(2024), today()).unwrap_err();
        assert_eq!(message_of(errors.month), "Date cannot be in the future");
        assert_eq!(
            message_of(errors.day),
            "Birth date cannot be in the future"
        );
    }

    #[test]
    fn valid_dates_pass() {
        assert_eq!(
            validate(Some(15), Some(5), Some(2000), today()).unwrap(),
            NaiveDate::from_ymd_opt(2000, 5, 15).unwrap()
        );
        assert_eq!(
            validate(Some(29), Some(2), Some(2000), today()).unwrap(),
            NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()
        );
        // Born today is not in the future.
        assert_eq!(validate(Some(20), Some(5), Some(2024), today()).unwrap(), today());
    }
}
