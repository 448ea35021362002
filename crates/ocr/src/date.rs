use chrono::NaiveDate;
use regex::{Captures, Regex};

re!(re_day_month_year,
    r"([0-9]{1,2})[/\-.]([0-9]{1,2})[/\-.]([0-9]{2,4})");
re!(re_day_month_name_year,
    r"(?i)([0-9]{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*[\s,]+([0-9]{4})");
re!(re_month_name_day_year,
    r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+([0-9]{1,2}),?\s+([0-9]{4})");
re!(re_year_month_day,
    r"([0-9]{2,4})[/\-.]([0-9]{1,2})[/\-.]([0-9]{1,2})");

/// One date layout: where to look, and how to turn a hit into a date.
struct DateMatcher {
    pattern: fn() -> &'static Regex,
    build: fn(&Captures<'_>) -> Option<NaiveDate>,
}

/// Declaration order breaks ties between hits at the same offset.
const MATCHERS: [DateMatcher; 4] = [
    DateMatcher { pattern: re_day_month_year, build: day_month_year },
    DateMatcher { pattern: re_day_month_name_year, build: day_month_name_year },
    DateMatcher { pattern: re_month_name_day_year, build: month_name_day_year },
    DateMatcher { pattern: re_year_month_day, build: year_month_day },
];

/// The earliest valid calendar date appearing anywhere in `text`.
///
/// Receipts print several dates (transaction, reprint, promotions); the
/// transaction date is usually the first one.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    let mut candidates: Vec<(usize, NaiveDate)> = MATCHERS
        .iter()
        .flat_map(|m| {
            (m.pattern)().captures_iter(text).filter_map(move |c| {
                let whole = c.get(0)?;
                if digit_flanked(text, whole.start(), whole.end()) {
                    return None;
                }
                (m.build)(&c).map(|d| (whole.start(), d))
            })
        })
        .collect();

    // Stable: same-offset hits keep matcher order.
    candidates.sort_by_key(|(offset, _)| *offset);
    candidates.first().map(|(_, date)| *date)
}

/// A hit glued to more digits is a fragment of some longer number (or of a
/// date already rejected by another layout), not a date of its own.
fn digit_flanked(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start > 0 && bytes[start - 1].is_ascii_digit();
    let after = bytes.get(end).is_some_and(u8::is_ascii_digit);
    before || after
}

fn day_month_year(c: &Captures<'_>) -> Option<NaiveDate> {
    calendar_date(expand_year(&c[3])?, c[2].parse().ok()?, c[1].parse().ok()?)
}

fn day_month_name_year(c: &Captures<'_>) -> Option<NaiveDate> {
    calendar_date(c[3].parse().ok()?, month_from_abbr(&c[2])?, c[1].parse().ok()?)
}

fn month_name_day_year(c: &Captures<'_>) -> Option<NaiveDate> {
    calendar_date(c[3].parse().ok()?, month_from_abbr(&c[1])?, c[2].parse().ok()?)
}

fn year_month_day(c: &Captures<'_>) -> Option<NaiveDate> {
    calendar_date(expand_year(&c[1])?, c[2].parse().ok()?, c[3].parse().ok()?)
}

/// `None` for impossible dates such as 31 February.
fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Two-digit years below 26 are this century, the rest last century.
/// Three-digit years are not a real layout and yield nothing.
fn expand_year(digits: &str) -> Option<i32> {
    let n: i32 = digits.parse().ok()?;
    match digits.len() {
        2 if n < 26 => Some(2000 + n),
        2 => Some(1900 + n),
        4 => Some(n),
        _ => None,
    }
}

fn month_from_abbr(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "jan" => Some(1), "feb" => Some(2), "mar" => Some(3), "apr" => Some(4),
        "may" => Some(5), "jun" => Some(6), "jul" => Some(7), "aug" => Some(8),
        "sep" => Some(9), "oct" => Some(10), "nov" => Some(11), "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn day_first_numeric() {
        assert_eq!(extract_date("STARBUCKS\n12/05/2024\nLatte"), ymd(2024, 5, 12));
        assert_eq!(extract_date("Date: 1-2-2024"), ymd(2024, 2, 1));
        assert_eq!(extract_date("Date: 03.11.2023"), ymd(2023, 11, 3));
    }

    #[test]
    fn earliest_offset_wins_regardless_of_label() {
        let text = "Date: 15/03/2024\nItems 3\nPrinted: 01/01/2024";
        assert_eq!(extract_date(text), ymd(2024, 3, 15));
    }

    #[test]
    fn invalid_calendar_date_is_discarded() {
        assert_eq!(extract_date("31/02/2024"), None);
        assert_eq!(extract_date("31/02/2024 then 28/02/2024"), ymd(2024, 2, 28));
    }

    #[test]
    fn day_month_name_year() {
        assert_eq!(extract_date("Date: 5 January 2024"), ymd(2024, 1, 5));
        assert_eq!(extract_date("12 Dec, 2023 14:02"), ymd(2023, 12, 12));
        assert_eq!(extract_date("09 SEPT 2024"), ymd(2024, 9, 9));
    }

    #[test]
    fn month_name_day_year() {
        assert_eq!(extract_date("Mar 7, 2023"), ymd(2023, 3, 7));
        assert_eq!(extract_date("issued october 30 2022"), ymd(2022, 10, 30));
    }

    #[test]
    fn year_first_numeric() {
        assert_eq!(extract_date("Order 2024-03-15"), ymd(2024, 3, 15));
        assert_eq!(extract_date("2024/3/5 10:11"), ymd(2024, 3, 5));
    }

    #[test]
    fn two_digit_year_century_cutoff() {
        assert_eq!(extract_date("01/02/25"), ymd(2025, 2, 1));
        assert_eq!(extract_date("01/02/26"), ymd(1926, 2, 1));
        assert_eq!(extract_date("01/02/99"), ymd(1999, 2, 1));
    }

    #[test]
    fn same_offset_tie_goes_to_earlier_matcher() {
        // Reads as 10 May 2012 (day-first) or 2010-05-12 (year-first).
        assert_eq!(extract_date("10/05/12"), ymd(2012, 5, 10));
    }

    #[test]
    fn fragments_of_longer_numbers_are_ignored() {
        assert_eq!(extract_date("Ref 1234/05/067"), None);
        assert_eq!(extract_date("Tel 03-7728-1234"), None);
    }

    #[test]
    fn three_digit_year_is_not_a_date() {
        assert_eq!(extract_date("12/05/202"), None);
    }

    #[test]
    fn no_date_is_none() {
        assert_eq!(extract_date(""), None);
        assert_eq!(extract_date("TOTAL RM 15.00"), None);
    }

    #[test]
    fn expand_year_rules() {
        assert_eq!(expand_year("00"), Some(2000));
        assert_eq!(expand_year("25"), Some(2025));
        assert_eq!(expand_year("26"), Some(1926));
        assert_eq!(expand_year("2024"), Some(2024));
        assert_eq!(expand_year("202"), None);
    }
}
