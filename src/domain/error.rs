use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Reasons a selection cannot be turned into a [`DateInterval`](crate::domain::DateInterval).
///
/// All of these are raised before anything is published.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("end date {end} precedes start date {start}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("`{0}` is not a YYYY-MM-DD date")]
    MalformedDate(String),

    #[error("{0} cannot be written as YYYY-MM-DD")]
    UnrepresentableDate(NaiveDate),

    #[error("preset `{0}` falls outside the supported calendar")]
    PresetOutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("preset id `{0}` appears more than once")]
    DuplicatePreset(String),
}
