use crate::domain::RangeError;
use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT_LEN: usize = 10;

/// Format a calendar day as `YYYY-MM-DD`.
///
/// Only four-digit years are accepted so that lexicographic order of the
/// output matches chronological order.
pub fn format_day(date: NaiveDate) -> Result<String, RangeError> {
    if !(0..=9999).contains(&date.year()) {
        return Err(RangeError::UnrepresentableDate(date));
    }

    Ok(format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}

/// Parse a strict `YYYY-MM-DD` calendar day.
pub fn parse_day(input: &str) -> Result<NaiveDate, RangeError> {
    let malformed = || RangeError::MalformedDate(input.to_string());

    let bytes = input.as_bytes();
    if bytes.len() != DATE_FORMAT_LEN {
        return Err(malformed());
    }

    for (i, b) in bytes.iter().enumerate() {
        let ok = match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        };
        if !ok {
            return Err(malformed());
        }
    }

    let year: i32 = input[0..4].parse().map_err(|_| malformed())?;
    let month: u32 = input[5..7].parse().map_err(|_| malformed())?;
    let day: u32 = input[8..10].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}
