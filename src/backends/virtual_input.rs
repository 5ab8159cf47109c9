use crate::device::{Device, DeviceState};
use crate::event::DeviceEvent;

/// Default id used when none is configured.
pub const DEFAULT_DEVICE_ID: &str = "input:0";

/// In-memory input device holding at most one pending value.
///
/// `input_data` is either `None` or the latest string passed to
/// [`read_input`](Device::read_input) that has not been processed yet.
#[derive(Debug)]
pub struct InputDevice {
    id: String,
    input_data: Option<String>,
}

impl InputDevice {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            input_data: None,
        }
    }

    /// The pending value, if any.
    pub fn pending(&self) -> Option<&str> {
        self.input_data.as_deref()
    }

    pub fn state(&self) -> DeviceState {
        match self.input_data {
            Some(_) => DeviceState::Holding,
            None => DeviceState::Empty,
        }
    }
}

impl Default for InputDevice {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_ID)
    }
}

impl Device for InputDevice {
    fn read_input(&mut self, input: &str) -> DeviceEvent {
        tracing::trace!(device_id = %self.id, len = input.len(), "read_input");
        self.input_data = Some(input.to_string());
        DeviceEvent::Read {
            device_id: self.id.clone(),
            data: input.to_string(),
        }
    }

    fn process_input(&mut self) -> DeviceEvent {
        // Presence is what counts: an empty string is still data.
        match self.input_data.take() {
            Some(data) => {
                tracing::trace!(device_id = %self.id, len = data.len(), "process_input");
                DeviceEvent::Processing {
                    device_id: self.id.clone(),
                    data,
                }
            }
            None => {
                tracing::debug!(device_id = %self.id, "process_input with nothing pending");
                DeviceEvent::NothingToProcess {
                    device_id: self.id.clone(),
                }
            }
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
