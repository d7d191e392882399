use std::time::Duration;

use serialport::SerialPort;
use tracing::info;

use crate::error::{Result, TransportError};
use crate::traits::IoTransport;

/// A [`Transport`](crate::Transport) over a physical serial port.
pub type SerialTransport = IoTransport<Box<dyn SerialPort>>;

/// Serial line settings for the matrix link.
///
/// The matrix speaks 19200 baud 8N1. The timeout bounds every blocking
/// read and write; nothing above the transport imposes its own.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: 19_200,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Open a serial device as a matrix transport.
pub fn open_serial(path: &str, config: &SerialConfig) -> Result<SerialTransport> {
    let port = serialport::new(path, config.baud_rate)
        .timeout(config.timeout)
        .open()
        .map_err(|source| TransportError::Open {
            path: path.to_string(),
            source,
        })?;

    info!(path, baud = config.baud_rate, "opened serial port");

    Ok(IoTransport::new(port))
}
