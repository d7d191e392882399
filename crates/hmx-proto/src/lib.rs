//! Frame codec and command catalog for the HDMI matrix protocol.
//!
//! The matrix speaks fixed 13-byte frames in both directions:
//! - A 2-byte header (`0xA5 0x5B`) for synchronization
//! - A 2-byte command code
//! - 8 data bytes (arg1 at offset 0, arg2 at offset 2, the rest zero)
//! - A 1-byte checksum over everything before it
//!
//! Everything here is pure: no I/O, no state, no validation of
//! argument ranges (that is the client's job before encoding).

pub mod catalog;
pub mod error;
pub mod frame;

pub use catalog::{
    Operation, BEEP_OFF, BEEP_ON, EDID_MAX, EDID_MIN, PORT_MAX, PORT_MIN,
};
pub use error::FrameError;
pub use frame::{checksum, decode, encode, payload, validate, FRAME_LEN, HEADER, PAYLOAD_LEN};
