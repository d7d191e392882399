//! Byte transport abstraction for HDMI matrix control.
//!
//! The matrix protocol exchanges fixed-length frames over a reliable
//! byte pipe. This crate provides that pipe: the [`Transport`] trait,
//! an adapter over any `Read + Write` stream, and a serial port
//! backend for the physical RS-232 link.
//!
//! This is the lowest layer of hmx. The codec and client crates build
//! on top of it and never touch a device directly.

pub mod error;
pub mod serial;
pub mod traits;

pub use error::{Result, TransportError};
pub use serial::{open_serial, SerialConfig, SerialTransport};
pub use traits::{IoTransport, Transport};
