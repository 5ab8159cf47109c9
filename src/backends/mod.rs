//! Device implementations.
//!
//! Implementations of [`Device`](crate::device::Device). There is a single
//! backend: [`virtual_input::InputDevice`], an in-memory device fed by the host.

pub mod virtual_input;

pub use virtual_input::InputDevice;
