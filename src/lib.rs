//! devhandler: a tiny input device manager.
//!
//! A [`Device`] stores one pending input and later processes it. The
//! [`DeviceManager`] runs read-then-process on a borrowed device and forwards
//! each resulting [`DeviceEvent`] to its [`EventBus`] listeners, such as the
//! stdout [`ConsoleLogger`].
//!
//! ```
//! use devhandler::{ConsoleLogger, DeviceManager, InputDevice};
//!
//! let mut device = InputDevice::default();
//! let mut manager = DeviceManager::new(&mut device);
//! manager.add_listener(ConsoleLogger::new());
//! manager.handle_input("Hola, mundo!");
//! ```

pub mod backends;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod filtered_listener;
pub mod logger;
pub mod manager;

pub use backends::InputDevice;
pub use config::{Config, OutputFormat};
pub use device::*;
pub use error::{Error, Result};
pub use event::*;
pub use eventbus::*;
pub use filtered_listener::FilteredListener;
pub use logger::ConsoleLogger;
pub use manager::*;
