/// Shared fixtures for selection tests.
///
/// ```rust
/// use crate::infrastructure::test_utils::fixtures::*;
///
/// #[test]
/// fn my_test() {
///     let catalog = last7_catalog();
///     let mut publisher = RecordingPublisher::new();
///     // ...
/// }
/// ```
#[cfg(test)]
pub mod fixtures {
    use crate::domain::{FixedClock, Preset, PresetCatalog};
    use crate::infrastructure::DatePublisher;
    use chrono::NaiveDate;

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    /// Midnight, 2024-03-15.
    pub fn fixed_clock() -> FixedClock {
        FixedClock::at_midnight(ymd(2024, 3, 15))
    }

    /// A catalog with one preset, `last7`, pinned to 2024-01-01 ..= 2024-01-08.
    pub fn last7_catalog() -> PresetCatalog {
        PresetCatalog::from_presets([Preset::fixed(
            "last7",
            "Last 7 Days",
            ymd(2024, 1, 1),
            ymd(2024, 1, 8),
        )])
        .expect("unique ids")
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Published {
        Start(String),
        End(String),
    }

    /// Publisher that remembers every call in order.
    #[derive(Debug, Default)]
    pub struct RecordingPublisher {
        pub calls: Vec<Published>,
    }

    impl RecordingPublisher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn is_empty(&self) -> bool {
            self.calls.is_empty()
        }
    }

    impl DatePublisher for RecordingPublisher {
        fn on_start_date(&mut self, date: &str) {
            self.calls.push(Published::Start(date.to_string()));
        }

        fn on_end_date(&mut self, date: &str) {
            self.calls.push(Published::End(date.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::domain::Clock;
    use crate::infrastructure::DatePublisher;

    #[test]
    fn recording_publisher_keeps_call_order() {
        let mut publisher = RecordingPublisher::new();
        publisher.on_end_date("2024-01-08");
        publisher.on_start_date("2024-01-01");

        assert_eq!(
            publisher.calls,
            vec![
                Published::End("2024-01-08".to_string()),
                Published::Start("2024-01-01".to_string()),
            ]
        );
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().date(), ymd(2024, 3, 15));
    }
}
