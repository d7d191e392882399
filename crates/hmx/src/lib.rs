//! Control 4x4 HDMI matrix switches over RS-232.
//!
//! hmx translates high-level operations (route an input to an output,
//! query hot-plug state, manage EDID emulation profiles, toggle the
//! confirmation beep) into the matrix's fixed 13-byte frame protocol
//! and runs them over a serial link.
//!
//! # Crate Structure
//!
//! - [`transport`] — byte transport abstraction and serial backend
//! - [`proto`] — frame codec and command catalog
//! - [`client`] — the [`MatrixClient`](hmx_client::MatrixClient) facade
//!
//! # Example
//!
//! ```no_run
//! use hmx::client::MatrixClient;
//! use hmx::transport::{open_serial, SerialConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let port = open_serial("/dev/ttyUSB0", &SerialConfig::default())?;
//! let mut matrix = MatrixClient::new(port);
//! matrix.change_port(1, 2)?;
//! # Ok(())
//! # }
//! ```

/// Re-export transport types.
pub mod transport {
    pub use hmx_transport::*;
}

/// Re-export protocol types.
pub mod proto {
    pub use hmx_proto::*;
}

/// Re-export client types.
pub mod client {
    pub use hmx_client::*;
}
