//! Raw field shaping that runs before validation: two-digit year expansion
//! and day zero-padding. Convenience only; anything still unparseable is
//! left for the validator to report.

/// Expand a two-digit year into a full one: values at or below the current
/// year's last two digits land in the current century, the rest in the
/// previous one ("25" in 2024 becomes 1925, "07" becomes 2007). Anything
/// that is not exactly two digits passes through untouched.
pub fn expand_two_digit_year(raw: &str, current_year: i32) -> String {
    let trimmed = raw.trim();
    if trimmed.len() == 2 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(two) = trimmed.parse::<i32>() {
            let century = current_year / 100 * 100;
            let expanded = if two <= current_year % 100 {
                century + two
            } else {
                century - 100 + two
            };
            return expanded.to_string();
        }
    }
    trimmed.to_string()
}

/// Zero-pad a single-digit day ("5" becomes "05").
pub fn zero_pad_day(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() == 1 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return format!("0{trimmed}");
    }
    trimmed.to_string()
}

/// Parse a normalized field; `None` means missing or non-numeric.
pub fn parse_field(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
