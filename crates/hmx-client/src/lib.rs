//! High-level client for 4x4 HDMI matrix switches.
//!
//! [`MatrixClient`] is the "just works" layer: it validates arguments,
//! encodes command frames, runs the write/read exchange against an
//! injected [`Transport`](hmx_transport::Transport), and decodes the
//! reply into typed results.
//!
//! Every operation is one synchronous request/response transaction.
//! The client carries no state between calls and takes `&mut self`,
//! so overlapping commands (which would desynchronize the fixed-length
//! framing) are ruled out at compile time.

pub mod client;
pub mod error;

pub use client::MatrixClient;
pub use error::{ArgKind, MatrixError, Result};
