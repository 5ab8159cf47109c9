use crate::event::{DeviceEvent, EventKind};

/// Trait for reacting to events from any device.
pub trait EventListener: Send {
    fn on_event(&mut self, event: &DeviceEvent);
}

/// Determines which kinds of events a listener wants to receive.
#[derive(Debug, Clone, Copy)]
pub enum EventFilter {
    All,
    ReadsOnly,
    /// `Processing` and `NothingToProcess`.
    ProcessingOnly,
    Custom(fn(&DeviceEvent) -> bool),
}

impl EventFilter {
    pub fn accepts(&self, event: &DeviceEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::ReadsOnly => event.kind() == EventKind::Read,
            EventFilter::ProcessingOnly => matches!(
                event.kind(),
                EventKind::Processing | EventKind::NothingToProcess
            ),
            EventFilter::Custom(f) => f(event),
        }
    }
}

struct ListenerEntry {
    id: u64,
    listener: Box<dyn EventListener>,
    enabled: bool,
    filter: EventFilter,
    tag: Option<String>, // device id
}

/// Fan-out of device events to registered listeners.
///
/// Listeners are invoked in registration order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<ListenerEntry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener with a filter and an optional device-id tag.
    pub fn add_listener(
        &mut self,
        listener: impl EventListener + 'static,
        filter: EventFilter,
        tag: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.listeners.push(ListenerEntry {
            id,
            listener: Box::new(listener),
            enabled: true,
            filter,
            tag,
        });
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.entry_mut(id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.entry_mut(id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely.
    pub fn remove_listener(&mut self, id: u64) {
        self.listeners.retain(|entry| entry.id != id);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Emits one event to all active and matching listeners.
    pub fn emit(&mut self, event: &DeviceEvent) {
        for entry in self.listeners.iter_mut() {
            if !entry.enabled {
                continue;
            }

            if let Some(ref wanted_id) = entry.tag {
                if event.device_id() != wanted_id.as_str() {
                    continue;
                }
            }

            if entry.filter.accepts(event) {
                entry.listener.on_event(event);
            }
        }
    }

    /// Emits a batch of events to matching listeners.
    pub fn emit_all(&mut self, events: &[DeviceEvent]) {
        for event in events {
            self.emit(event);
        }
    }

    fn entry_mut(&mut self, id: u64) -> Option<&mut ListenerEntry> {
        self.listeners.iter_mut().find(|entry| entry.id == id)
    }
}

/// Listener that keeps every event it receives.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    events: std::sync::Arc<std::sync::Mutex<Vec<DeviceEvent>>>,
}

#[cfg(test)]
impl Recorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn events(&self) -> Vec<DeviceEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl EventListener for Recorder {
    fn on_event(&mut self, event: &DeviceEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(dev: &str, data: &str) -> DeviceEvent {
        DeviceEvent::Read {
            device_id: dev.into(),
            data: data.into(),
        }
    }

    fn processing(dev: &str, data: &str) -> DeviceEvent {
        DeviceEvent::Processing {
            device_id: dev.into(),
            data: data.into(),
        }
    }

    #[test]
    fn ids_increase_and_delivery_follows_registration() {
        let mut bus = EventBus::new();
        let first = Recorder::new();
        let second = Recorder::new();
        let a = bus.add_listener(first.clone(), EventFilter::All, None);
        let b = bus.add_listener(second.clone(), EventFilter::All, None);
        assert_eq!((a, b), (0, 1));
        assert_eq!(bus.len(), 2);

        bus.emit_all(&[read("d", "x"), processing("d", "x")]);
        assert_eq!(first.events(), vec![read("d", "x"), processing("d", "x")]);
        assert_eq!(second.events(), first.events());
    }

    #[test]
    fn disabled_listener_is_skipped_until_enabled() {
        let mut bus = EventBus::new();
        let rec = Recorder::new();
        let id = bus.add_listener(rec.clone(), EventFilter::All, None);

        bus.disable(id);
        bus.emit(&read("d", "muted"));
        assert!(rec.events().is_empty());

        bus.enable(id);
        bus.emit(&read("d", "heard"));
        assert_eq!(rec.events(), vec![read("d", "heard")]);
    }

    #[test]
    fn removed_listener_gets_nothing() {
        let mut bus = EventBus::new();
        let rec = Recorder::new();
        let id = bus.add_listener(rec.clone(), EventFilter::All, None);
        bus.remove_listener(id);
        bus.remove_listener(99);
        assert!(bus.is_empty());

        bus.emit(&read("d", "x"));
        assert!(rec.events().is_empty());
    }

    #[test]
    fn tag_restricts_to_device() {
        let mut bus = EventBus::new();
        let rec = Recorder::new();
        bus.add_listener(rec.clone(), EventFilter::All, Some("kbd".into()));

        bus.emit(&read("pad", "ignored"));
        bus.emit(&read("kbd", "kept"));
        assert_eq!(rec.events(), vec![read("kbd", "kept")]);
    }

    #[test]
    fn filters_select_by_kind() {
        let mut bus = EventBus::new();
        let reads = Recorder::new();
        let procs = Recorder::new();
        let custom = Recorder::new();
        bus.add_listener(reads.clone(), EventFilter::ReadsOnly, None);
        bus.add_listener(procs.clone(), EventFilter::ProcessingOnly, None);
        bus.add_listener(
            custom.clone(),
            EventFilter::Custom(|ev| ev.data().is_some_and(str::is_empty)),
            None,
        );

        let nothing = DeviceEvent::NothingToProcess {
            device_id: "d".into(),
        };
        bus.emit_all(&[read("d", ""), processing("d", "x"), nothing.clone()]);

        assert_eq!(reads.events(), vec![read("d", "")]);
        assert_eq!(procs.events(), vec![processing("d", "x"), nothing]);
        assert_eq!(custom.events(), vec![read("d", "")]);
    }
}
