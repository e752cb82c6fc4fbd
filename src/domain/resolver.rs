use crate::domain::{
    Clock, DateInterval, PresetCatalog, PresetId, RangeError, SystemClock, start_of_day,
};
use chrono::{NaiveDate, NaiveDateTime};

/// A raw choice made in the selector.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionInput {
    Preset(PresetId),
    Explicit {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl SelectionInput {
    pub fn preset(id: impl Into<String>) -> Self {
        Self::Preset(PresetId::new(id))
    }

    pub fn explicit(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::Explicit { start, end }
    }

    pub fn days(start: NaiveDate, end: NaiveDate) -> Self {
        Self::explicit(start_of_day(start), start_of_day(end))
    }

    /// Explicit range with the bounds put in order.
    ///
    /// For callers that would rather swap a reversed pick than reject it.
    pub fn swapped(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        if a <= b {
            Self::explicit(a, b)
        } else {
            Self::explicit(b, a)
        }
    }
}

impl From<PresetId> for SelectionInput {
    fn from(id: PresetId) -> Self {
        Self::Preset(id)
    }
}

pub struct RangeResolver<'a> {
    catalog: &'a PresetCatalog,
    clock: Box<dyn Clock + 'a>,
}

impl<'a> RangeResolver<'a> {
    pub fn new(catalog: &'a PresetCatalog) -> Self {
        Self::with_clock(catalog, SystemClock)
    }

    pub fn with_clock(catalog: &'a PresetCatalog, clock: impl Clock + 'a) -> Self {
        Self {
            catalog,
            clock: Box::new(clock),
        }
    }

    pub fn catalog(&self) -> &PresetCatalog {
        self.catalog
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn resolve(&self, input: &SelectionInput) -> Result<DateInterval, RangeError> {
        let (start, end) = match input {
            SelectionInput::Preset(id) => {
                let preset = self
                    .catalog
                    .find(id.as_str())
                    .ok_or_else(|| RangeError::UnknownPreset(id.to_string()))?;
                log::trace!("resolving preset {} ({})", preset.id, preset.label);
                preset.resolve(self.clock.now())?
            }
            SelectionInput::Explicit { start, end } => (*start, *end),
        };

        resolve_instants(start, end)
    }
}

/// Validate an ordered pair of instants and truncate both to calendar days.
pub fn resolve_instants(
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<DateInterval, RangeError> {
    if start > end {
        return Err(RangeError::InvalidRange { start, end });
    }

    DateInterval::new(start.date(), end.date())
}
