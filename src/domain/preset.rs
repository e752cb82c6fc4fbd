use crate::domain::clock::start_of_day;
use crate::domain::{CatalogError, RangeError};
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetId(pub String);

impl PresetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PresetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How a preset turns "now" into a pair of instants.
///
/// The set is closed so catalogs stay serializable; a new kind of period
/// needs a variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresetRule {
    DaysBack { days: u32 },
    /// Calendar months; the day is clamped to the end of shorter months.
    MonthsBack { months: u32 },
    YearToDate,
    /// The whole calendar month before the one containing `now`.
    PreviousMonth,
    Fixed { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: PresetId,
    pub label: String,
    pub rule: PresetRule,
}

impl Preset {
    pub fn new(id: impl Into<String>, label: impl Into<String>, rule: PresetRule) -> Self {
        Self {
            id: PresetId::new(id),
            label: label.into(),
            rule,
        }
    }

    pub fn days_back(id: impl Into<String>, label: impl Into<String>, days: u32) -> Self {
        Self::new(id, label, PresetRule::DaysBack { days })
    }

    pub fn months_back(id: impl Into<String>, label: impl Into<String>, months: u32) -> Self {
        Self::new(id, label, PresetRule::MonthsBack { months })
    }

    pub fn fixed(
        id: impl Into<String>,
        label: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self::new(id, label, PresetRule::Fixed { start, end })
    }

    /// The `[start, end]` pair this preset denotes at `now`.
    ///
    /// Pure in `now`; ordering of the pair is checked by the resolver.
    pub fn resolve(
        &self,
        now: NaiveDateTime,
    ) -> Result<(NaiveDateTime, NaiveDateTime), RangeError> {
        let out_of_range = || RangeError::PresetOutOfRange(self.id.to_string());

        match &self.rule {
            PresetRule::DaysBack { days } => {
                let start = now
                    .checked_sub_signed(Duration::days(i64::from(*days)))
                    .ok_or_else(out_of_range)?;
                Ok((start, now))
            }
            PresetRule::MonthsBack { months } => {
                let start = now
                    .checked_sub_months(Months::new(*months))
                    .ok_or_else(out_of_range)?;
                Ok((start, now))
            }
            PresetRule::YearToDate => {
                let jan_first =
                    NaiveDate::from_ymd_opt(now.year(), 1, 1).ok_or_else(out_of_range)?;
                Ok((start_of_day(jan_first), now))
            }
            PresetRule::PreviousMonth => {
                let last_day = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
                    .and_then(|first| first.pred_opt())
                    .ok_or_else(out_of_range)?;
                let first_day = NaiveDate::from_ymd_opt(last_day.year(), last_day.month(), 1)
                    .ok_or_else(out_of_range)?;
                Ok((start_of_day(first_day), start_of_day(last_day)))
            }
            PresetRule::Fixed { start, end } => Ok((start_of_day(*start), start_of_day(*end))),
        }
    }
}

/// Presets in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_presets(presets: impl IntoIterator<Item = Preset>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for preset in presets {
            catalog.push(preset)?;
        }
        Ok(catalog)
    }

    pub fn push(&mut self, preset: Preset) -> Result<&mut Self, CatalogError> {
        if self.find(preset.id.as_str()).is_some() {
            return Err(CatalogError::DuplicatePreset(preset.id.0));
        }
        self.presets.push(preset);
        Ok(self)
    }

    pub fn find(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn into_presets(self) -> Vec<Preset> {
        self.presets
    }

    /// Quick options shown when no catalog file is configured.
    pub fn standard() -> Self {
        Self {
            presets: vec![
                Preset::days_back("last-7-days", "Last 7 Days", 7),
                Preset::days_back("last-30-days", "Last 30 Days", 30),
                Preset::days_back("last-90-days", "Last 90 Days", 90),
                Preset::months_back("last-6-months", "Last 6 Months", 6),
                Preset::months_back("last-12-months", "Last 12 Months", 12),
                Preset::new("year-to-date", "Year to Date", PresetRule::YearToDate),
                Preset::new("previous-month", "Previous Month", PresetRule::PreviousMonth),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a PresetCatalog {
    type Item = &'a Preset;
    type IntoIter = std::slice::Iter<'a, Preset>;

    fn into_iter(self) -> Self::IntoIter {
        self.presets.iter()
    }
}
