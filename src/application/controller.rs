use crate::domain::{DateInterval, RangeError, RangeResolver, SelectionInput, SelectionState};
use crate::infrastructure::{Callbacks, DatePublisher};

/// Drives one date selector: resolves picks, publishes them, and keeps the
/// quick-options panel state.
pub struct SelectionController<'a, P: DatePublisher> {
    resolver: RangeResolver<'a>,
    publisher: P,
    state: SelectionState,
}

impl<'a, P: DatePublisher> SelectionController<'a, P> {
    pub fn new(resolver: RangeResolver<'a>, publisher: P) -> Self {
        Self {
            resolver,
            publisher,
            state: SelectionState::new(),
        }
    }

    /// Resolve `input` and publish it.
    ///
    /// On error nothing is published and the panel state is left alone.
    pub fn select(&mut self, input: &SelectionInput) -> Result<DateInterval, RangeError> {
        let interval = self.resolver.resolve(input)?;

        self.publisher.on_start_date(interval.start());
        self.publisher.on_end_date(interval.end());
        self.state.collapse();

        log::debug!("selected {interval}");
        Ok(interval)
    }

    pub fn toggle(&mut self) -> bool {
        let expanded = self.state.toggle();
        log::debug!("selector expanded = {expanded}");
        expanded
    }

    /// Close the quick options without publishing, e.g. when the date picker opens.
    pub fn collapse(&mut self) {
        self.state.collapse();
    }

    pub fn expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn resolver(&self) -> &RangeResolver<'a> {
        &self.resolver
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn into_publisher(self) -> P {
        self.publisher
    }
}

impl<'a, S, E> SelectionController<'a, Callbacks<S, E>>
where
    S: FnMut(&str),
    E: FnMut(&str),
{
    pub fn with_callbacks(resolver: RangeResolver<'a>, on_start_date: S, on_end_date: E) -> Self {
        Self::new(resolver, Callbacks::new(on_start_date, on_end_date))
    }
}
