use crate::domain::calendar::format_day;
use crate::domain::clock::start_of_day;
use crate::domain::RangeError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A closed range of calendar days, `start <= end`, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInterval {
    start: String,
    end: String,
    #[serde(skip)]
    start_day: NaiveDate,
    #[serde(skip)]
    end_day: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange {
                start: start_of_day(start),
                end: start_of_day(end),
            });
        }

        Ok(Self {
            start: format_day(start)?,
            end: format_day(end)?,
            start_day: start,
            end_day: end,
        })
    }

    pub fn day(date: NaiveDate) -> Result<Self, RangeError> {
        Self::new(date, date)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn start_day(&self) -> NaiveDate {
        self.start_day
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end_day
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_day && date <= self.end_day
    }

    pub fn len_days(&self) -> i64 {
        (self.end_day - self.start_day).num_days() + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start_day;
        (0..self.len_days()).map(move |i| start + chrono::Duration::days(i))
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}
