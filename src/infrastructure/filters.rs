use crate::infrastructure::DatePublisher;
use serde::{Deserialize, Serialize};

/// In-memory date filters, updated one bound at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterStore {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(skip)]
    updates: usize,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_start_date(&mut self, date: impl Into<String>) {
        self.start_date = Some(date.into());
        self.updates += 1;
    }

    pub fn update_end_date(&mut self, date: impl Into<String>) {
        self.end_date = Some(date.into());
        self.updates += 1;
    }

    /// Number of setter calls since creation.
    pub fn updates(&self) -> usize {
        self.updates
    }

    pub fn range(&self) -> Option<(&str, &str)> {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }
}

impl DatePublisher for FilterStore {
    fn on_start_date(&mut self, date: &str) {
        log::debug!("filters: start_date = {date}");
        self.update_start_date(date);
    }

    fn on_end_date(&mut self, date: &str) {
        log::debug!("filters: end_date = {date}");
        self.update_end_date(date);
    }
}
