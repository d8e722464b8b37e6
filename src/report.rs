//! Boundary-layer formatting: result rows shared by the terminal report
//! and the SVG card, en-US date strings, thousands grouping and error
//! output. The computation modules hand over plain values; every piece of
//! display text is shaped here.

use chrono::NaiveDate;

use crate::age::AgeResult;
use crate::birthday::NextBirthday;
use crate::validate::ValidationErrors;

/// (label, value) pairs in display order.
pub fn result_rows(birth: NaiveDate, result: &AgeResult) -> Vec<(String, String)> {
    vec![
        ("Born".to_string(), format_date(birth)),
        ("Years".to_string(), result.parts.years.to_string()),
        ("Months".to_string(), result.parts.months.to_string()),
        ("Days".to_string(), result.parts.days.to_string()),
        (
            "Next birthday".to_string(),
            format_next_birthday(&result.next_birthday),
        ),
        ("Days lived".to_string(), group_thousands(result.total_days)),
    ]
}

/// "Today!" on the birthday itself, otherwise "N days (Month D, YYYY)".
pub fn format_next_birthday(next: &NextBirthday) -> String {
    if next.is_today {
        return "Today!".to_string();
    }
    format!("{} days ({})", next.days_until, format_date(next.date))
}

/// "Month D, YYYY" with en-US month names.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Insert `,` separators every three digits ("9131" becomes "9,131").
/// Callers only pass non-negative values.
pub fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Splits a row into key, dot padding and value so the pieces can be
/// styled separately.
pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

/// Widest key-plus-value span, used to align the dotted rows.
pub fn align_width(rows: &[(String, String)]) -> usize {
    rows.iter()
        .map(|(k, v)| k.len() + 2 + v.len())
        .max()
        .unwrap_or(0)
}

/// Aligned "key: ... value" lines on stdout.
pub fn print_report(rows: &[(String, String)]) {
    let width = align_width(rows);
    for (key, value) in rows {
        let (key_part, dots, value) = build_stat_row(key, value, width);
        println!("{key_part}{dots}{value}");
    }
}

/// One line per failed field, for stderr.
pub fn print_errors(errors: &ValidationErrors) {
    for (field, err) in errors.iter() {
        eprintln!("{field}: {}", err.message);
    }
}
