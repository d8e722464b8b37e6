//! Next-birthday lookup: the next calendar occurrence of the birth
//! month/day and how many whole days away it is.

use chrono::{Datelike, NaiveDate};

/// Next occurrence of the birth month/day, as a plain date. Display
/// formatting belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextBirthday {
    pub days_until: i64,
    pub is_today: bool,
    pub date: NaiveDate,
}

/// Find the next birthday on or after `today`.
///
/// A Feb 29 birth is observed on Mar 1 in common years. When that observed
/// date is today itself, `days_until` is 0 but `is_today` stays false: the
/// real anniversary is Feb 29.
pub fn next_birthday(birth: NaiveDate, today: NaiveDate) -> NextBirthday {
    if today.month() == birth.month() && today.day() == birth.day() {
        return NextBirthday {
            days_until: 0,
            is_today: true,
            date: today,
        };
    }

    let mut candidate = occurrence_in(today.year(), birth);
    if candidate < today {
        candidate = occurrence_in(today.year() + 1, birth);
    }

    NextBirthday {
        days_until: (candidate - today).num_days(),
        is_today: false,
        date: candidate,
    }
}

/// The birthday as observed in `year`.
fn occurrence_in(year: i32, birth: NaiveDate) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, birth.month(), birth.day()) {
        Some(date) => date,
        // Feb 29 in a common year.
        None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birthday_today() {
        let next = next_birthday(date(2000, 5, 15), date(2024, 5, 15));
        assert!(next.is_today);
        assert_eq!(next.days_until, 0);
    }

    #[test]
    fn upcoming_later_this_year() {
        let next = next_birthday(date(1992, 6, 14), date(2024, 5, 30));
        assert!(!next.is_today);
        assert_eq!(next.date, date(2024, 6, 14));
        assert_eq!(next.days_until, 15);
    }

    #[test]
    fn already_passed_rolls_to_next_year() {
        let next = next_birthday(date(1992, 6, 14), date(2024, 7, 1));
        assert_eq!(next.date, date(2025, 6, 14));
        assert_eq!(next.days_until, 348);
    }

    #[test]
    fn leap_day_observed_on_march_first_in_common_years() {
        let next = next_birthday(date(2000, 2, 29), date(2023, 1, 10));
        assert!(!next.is_today);
        assert_eq!(next.date, date(2023, 3, 1));
        assert_eq!(next.days_until, 50);
    }

    #[test]
    fn leap_day_kept_in_leap_years() {
        let next = next_birthday(date(2000, 2, 29), date(2024, 2, 1));
        assert_eq!(next.date, date(2024, 2, 29));
        assert_eq!(next.days_until, 28);
    }

    #[test]
    fn observed_leap_birthday_falling_on_today() {
        // Mar 1 of a common year: the observed date is today, the true
        // anniversary is not.
        let next = next_birthday(date(2000, 2, 29), date(2023, 3, 1));
        assert!(!next.is_today);
        assert_eq!(next.days_until, 0);
        assert_eq!(next.date, date(2023, 3, 1));
    }
}
