use crate::event::DeviceEvent;

/// A source that takes one pending input value and later processes it.
///
/// Each call returns the event describing what happened; implementations do
/// not print anything themselves.
pub trait Device {
    /// Store `input` as the pending value, replacing whatever was there.
    fn read_input(&mut self, input: &str) -> DeviceEvent;

    /// Consume the pending value, if any.
    fn process_input(&mut self) -> DeviceEvent;

    fn id(&self) -> &str;
}

/// Whether a device currently holds unprocessed data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceState {
    #[default]
    Empty,
    Holding,
}
