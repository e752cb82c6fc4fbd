/// Receiver for a resolved selection.
///
/// The controller calls `on_start_date` and then `on_end_date`, once each,
/// for every successful selection. Both values are `YYYY-MM-DD` strings.
pub trait DatePublisher {
    fn on_start_date(&mut self, date: &str);

    fn on_end_date(&mut self, date: &str);
}

impl<P: DatePublisher + ?Sized> DatePublisher for &mut P {
    fn on_start_date(&mut self, date: &str) {
        (**self).on_start_date(date);
    }

    fn on_end_date(&mut self, date: &str) {
        (**self).on_end_date(date);
    }
}

impl<P: DatePublisher + ?Sized> DatePublisher for Box<P> {
    fn on_start_date(&mut self, date: &str) {
        (**self).on_start_date(date);
    }

    fn on_end_date(&mut self, date: &str) {
        (**self).on_end_date(date);
    }
}

/// A publisher made from two closures, one per bound.
pub struct Callbacks<S, E> {
    on_start: S,
    on_end: E,
}

impl<S, E> Callbacks<S, E>
where
    S: FnMut(&str),
    E: FnMut(&str),
{
    pub fn new(on_start: S, on_end: E) -> Self {
        Self { on_start, on_end }
    }
}

impl<S, E> DatePublisher for Callbacks<S, E>
where
    S: FnMut(&str),
    E: FnMut(&str),
{
    fn on_start_date(&mut self, date: &str) {
        (self.on_start)(date);
    }

    fn on_end_date(&mut self, date: &str) {
        (self.on_end)(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn callbacks_forward_each_bound() {
        let calls = RefCell::new(Vec::new());
        let mut publisher = Callbacks::new(
            |d: &str| calls.borrow_mut().push(format!("start {d}")),
            |d: &str| calls.borrow_mut().push(format!("end {d}")),
        );

        publisher.on_start_date("2024-01-01");
        publisher.on_end_date("2024-01-08");

        assert_eq!(
            calls.into_inner(),
            vec!["start 2024-01-01".to_string(), "end 2024-01-08".to_string()]
        );
    }

    #[test]
    fn boxed_publisher_forwards() {
        let mut seen = Vec::new();
        {
            let mut boxed: Box<dyn DatePublisher + '_> = Box::new(Callbacks::new(
                |d: &str| seen.push(d.to_string()),
                |_: &str| {},
            ));
            boxed.on_start_date("2024-05-05");
        }
        assert_eq!(seen, vec!["2024-05-05".to_string()]);
    }
}
