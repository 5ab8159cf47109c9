use crate::event::DeviceEvent;
use crate::eventbus::EventListener;

/// Forwards to `inner` only the events `predicate` accepts.
///
/// Unlike [`EventFilter::Custom`](crate::eventbus::EventFilter::Custom), the
/// predicate may capture state, and the wrapped listener is handed back by
/// [`into_inner`](Self::into_inner).
pub struct FilteredListener<P, L> {
    predicate: P,
    inner: L,
}

impl<P, L> FilteredListener<P, L>
where
    P: Fn(&DeviceEvent) -> bool + Send,
    L: EventListener,
{
    pub fn new(predicate: P, inner: L) -> Self {
        Self { predicate, inner }
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<P, L> EventListener for FilteredListener<P, L>
where
    P: Fn(&DeviceEvent) -> bool + Send,
    L: EventListener,
{
    fn on_event(&mut self, event: &DeviceEvent) {
        if (self.predicate)(event) {
            self.inner.on_event(event);
        }
    }
}
