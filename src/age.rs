//! age.rs
//!
//! Calendar-aware age arithmetic: the exact elapsed years/months/days
//! between a birth date and today, plus the whole-day span.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the previous month)
//!   • leap years
//!   • varying month lengths

use chrono::{Datelike, NaiveDate};

use crate::birthday::{self, NextBirthday};

/// Elapsed years, months and days. For any birth date not after today:
/// `years >= 0`, `months` in 0..=11, `days` in 0..=30.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeParts {
    pub years: i32,
    pub months: u32,
    pub days: u32,
}

/// Everything the presentation layer needs for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeResult {
    pub parts: AgeParts,
    pub next_birthday: NextBirthday,
    pub total_days: i64,
}

/// Full result for a validated birth date: exact age, next birthday and
/// days lived.
pub fn summarize(birth: NaiveDate, today: NaiveDate) -> AgeResult {
    AgeResult {
        parts: calculate_age(birth, today),
        next_birthday: birthday::next_birthday(birth, today),
        total_days: total_days(birth, today),
    }
}

/// Exact age in years, months and days.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> AgeParts {
    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Determine the previous month relative to `today`.
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        // Count from the most recent monthly anniversary of the birth day,
        // which lies in that month with the birth day clamped to the month
        // length (a day-31 birth anchors at Feb 29 in March 2024). When the
        // clamp is idle this reduces to adding the previous month's length;
        // with it, `days` stays within 0..=30 even when the previous month
        // is shorter than the deficit.
        let prev_len = days_in_month(prev_year, prev_month) as i32;
        let anchor_day = (birth.day() as i32).min(prev_len);
        days = today.day() as i32 + (prev_len - anchor_day);
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeParts {
        years,
        months: months as u32,
        days: days as u32,
    }
}

/// Whole days lived, birth midnight to today midnight.
pub fn total_days(birth: NaiveDate, today: NaiveDate) -> i64 {
    (today - birth).num_days()
}

/// Returns number of days in a given year/month (handles leap years)
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
