/// Errors that can occur in transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the serial device.
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: serialport::Error,
    },

    /// An I/O error occurred on the transport stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream was closed while a write was in progress.
    #[error("transport closed (write made no progress)")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
