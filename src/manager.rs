use crate::device::Device;
use crate::event::DeviceEvent;
use crate::eventbus::{EventBus, EventFilter, EventListener};

/// Drives one borrowed [`Device`] and fans its events out to listeners.
///
/// The manager never owns the device; the borrow keeps it alive and
/// unaliased for as long as the manager exists.
pub struct DeviceManager<'a> {
    device: &'a mut dyn Device,
    bus: EventBus,
}

impl<'a> DeviceManager<'a> {
    pub fn new(device: &'a mut dyn Device) -> Self {
        Self::with_bus(device, EventBus::new())
    }

    pub fn with_bus(device: &'a mut dyn Device, bus: EventBus) -> Self {
        Self { device, bus }
    }

    /// Shorthand for registering an unfiltered, untagged listener.
    pub fn add_listener(&mut self, listener: impl EventListener + 'static) -> u64 {
        self.bus.add_listener(listener, EventFilter::All, None)
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn device_id(&self) -> &str {
        self.device.id()
    }

    /// Reads `input` into the device, then processes it straight away.
    ///
    /// Returns the two events in emission order.
    pub fn handle_input(&mut self, input: &str) -> [DeviceEvent; 2] {
        tracing::debug!(device_id = self.device.id(), len = input.len(), "handle_input");
        let read = self.device.read_input(input);
        self.bus.emit(&read);
        let processed = self.device.process_input();
        self.bus.emit(&processed);
        [read, processed]
    }

    /// Processes whatever the device holds without reading anything new.
    pub fn process_pending(&mut self) -> DeviceEvent {
        let event = self.device.process_input();
        self.bus.emit(&event);
        event
    }
}
