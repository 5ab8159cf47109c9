//! Device events.
//!
//! Every device operation produces exactly one [`DeviceEvent`]. Devices never
//! print; they hand the event back to the [`DeviceManager`](crate::manager::DeviceManager),
//! which forwards it to the [`EventBus`](crate::eventbus::EventBus).
//!
//! ## Text form
//! `Display` renders the console line for each event:
//! - `Read` → `Datos leídos: {data}`
//! - `Processing` → `Procesando datos: {data}`
//! - `NothingToProcess` → `No hay datos para procesar.`
//!
//! The data is echoed untouched, so an empty read renders as `"Datos leídos: "`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One observable side effect of a [`Device`](crate::device::Device) call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DeviceEvent {
    /// `read_input` stored a value.
    Read { device_id: String, data: String },

    /// `process_input` consumed the pending value.
    Processing { device_id: String, data: String },

    /// `process_input` found nothing pending.
    NothingToProcess { device_id: String },
}

/// Coarse category of a [`DeviceEvent`], used by listener filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Read,
    Processing,
    NothingToProcess,
}

impl DeviceEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DeviceEvent::Read { .. } => EventKind::Read,
            DeviceEvent::Processing { .. } => EventKind::Processing,
            DeviceEvent::NothingToProcess { .. } => EventKind::NothingToProcess,
        }
    }

    /// Id of the device that produced this event.
    pub fn device_id(&self) -> &str {
        match self {
            DeviceEvent::Read { device_id, .. }
            | DeviceEvent::Processing { device_id, .. }
            | DeviceEvent::NothingToProcess { device_id } => device_id,
        }
    }

    /// The carried value, if any.
    pub fn data(&self) -> Option<&str> {
        match self {
            DeviceEvent::Read { data, .. } | DeviceEvent::Processing { data, .. } => Some(data),
            DeviceEvent::NothingToProcess { .. } => None,
        }
    }
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceEvent::Read { data, .. } => write!(f, "Datos leídos: {data}"),
            DeviceEvent::Processing { data, .. } => write!(f, "Procesando datos: {data}"),
            DeviceEvent::NothingToProcess { .. } => f.write_str("No hay datos para procesar."),
        }
    }
}
