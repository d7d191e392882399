use std::fmt;

use hmx_proto::{FrameError, Operation};
use hmx_transport::TransportError;

/// Which kind of argument failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Port,
    Edid,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKind::Port => f.write_str("port number"),
            ArgKind::Edid => f.write_str("EDID value"),
        }
    }
}

/// Errors that can occur in matrix operations.
///
/// The three kinds are deliberately distinct so callers can branch on
/// them: `Validation` never touched the device, `Transport` means the
/// I/O itself failed, `Response` means the I/O succeeded but the
/// device answered with a malformed frame.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// An argument is outside its valid range. Raised before any I/O.
    #[error("invalid {kind} {value} (valid range {min}..={max})")]
    Validation {
        kind: ArgKind,
        value: u8,
        min: u8,
        max: u8,
    },

    /// The underlying write or read failed.
    #[error("{op}: transport failed: {source}")]
    Transport {
        op: Operation,
        #[source]
        source: TransportError,
    },

    /// The device answered, but not with a valid frame.
    #[error("{op}: invalid response: {source}")]
    Response {
        op: Operation,
        #[source]
        source: FrameError,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
