//! Text formatting utilities
//!
//! Date, number and text helpers used by the presentation layer. None of
//! these can fail: odd inputs produce whatever the direct textual
//! transformation yields.

use std::fmt::Display;

use chrono::Datelike;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ELLIPSIS: &str = "...";

/// Formats a date as "January 5, 2024"
///
/// Accepts any chrono calendar value (`NaiveDate`, `NaiveDateTime`,
/// `DateTime<Tz>`). The calendar fields are read as-is; a `DateTime` is
/// rendered in whatever zone it already carries.
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!(
        "{} {}, {}",
        MONTH_NAMES[date.month0() as usize],
        date.day(),
        date.year()
    )
}

/// Formats a number with comma grouping separators
///
/// The value's `Display` text is grouped in place: a comma goes before every
/// digit that starts a run of digits whose length is a multiple of three,
/// unless it follows a non-word character such as `-` or `.`.
///
/// # Arguments
/// - `value` - Anything with a decimal `Display` form
///
/// # Returns
/// The grouped text, e.g. `1234567` becomes `"1,234,567"`
///
/// # Note
/// Grouping is purely textual, so fractional digits are grouped too:
/// `1234.5678` becomes `"1,234.5,678"`.
pub fn format_number<N: Display>(value: N) -> String {
    group_digits(&value.to_string())
}

fn group_digits(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();

    // Length of the digit run starting at each position
    let mut runs = vec![0usize; chars.len() + 1];
    for i in (0..chars.len()).rev() {
        if chars[i].is_ascii_digit() {
            runs[i] = runs[i + 1] + 1;
        }
    }

    let mut result = String::with_capacity(text.len() + text.len() / 3);
    for (i, &c) in chars.iter().enumerate() {
        let run = runs[i];
        if i > 0 && run > 0 && run % 3 == 0 && is_word_char(chars[i - 1]) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Truncates text to `max_length` characters and appends "..."
///
/// Text whose character count is at or below `max_length` comes back
/// unchanged. The cut is a plain character count with no word-boundary
/// handling.
///
/// A negative `max_length` is not rejected: it counts from the end, so
/// `truncate_text("abcdef", -2)` gives `"abcd..."`.
pub fn truncate_text(text: &str, max_length: isize) -> String {
    let len = text.chars().count();
    if (len as isize) <= max_length {
        return text.to_string();
    }

    let keep = if max_length >= 0 {
        max_length as usize
    } else {
        len.saturating_sub(max_length.unsigned_abs())
    };

    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(&date), "January 5, 2024");
    }

    #[test]
    fn test_format_date_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
        assert_eq!(format_date(&date), "September 1, 2023");
    }

    #[test]
    fn test_format_date_uses_carried_zone() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(&dt), "December 31, 2024");
        assert_eq!(format_date(&dt.naive_utc()), "December 31, 2024");
    }

    #[test]
    fn test_format_number_groups_integers() {
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1234), "-1,234");
        assert_eq!(format_number(-123), "-123");
        assert_eq!(format_number(-123456), "-123,456");
    }

    #[test]
    fn test_format_number_groups_fraction_textually() {
        assert_eq!(format_number(1234.5678), "1,234.5,678");
        assert_eq!(format_number(1234.5), "1,234.5");
    }

    #[test]
    fn test_format_number_non_numeric_text_passes_through() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn test_truncate_text_boundaries() {
        assert_eq!(truncate_text("abc", 3), "abc");
        assert_eq!(truncate_text("abcd", 3), "abc...");
        assert_eq!(truncate_text("", 0), "");
        assert_eq!(truncate_text("a", 0), "...");
    }

    #[test]
    fn test_truncate_text_counts_characters() {
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_text("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn test_truncate_text_negative_length_counts_from_end() {
        assert_eq!(truncate_text("abcdef", -2), "abcd...");
        assert_eq!(truncate_text("abc", -10), "...");
    }
}
