use std::fmt;
use std::io;

use hmx_client::MatrixError;
use hmx_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    let code = match &err {
        TransportError::Io(io) if io.kind() == io::ErrorKind::TimedOut => TIMEOUT,
        TransportError::Io(io) if io.kind() == io::ErrorKind::PermissionDenied => FAILURE,
        TransportError::Open { .. } => FAILURE,
        _ => TRANSPORT_ERROR,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn matrix_error(context: &str, err: MatrixError) -> CliError {
    match err {
        MatrixError::Validation { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        MatrixError::Transport { source, .. } => transport_error(context, source),
        MatrixError::Response { .. } => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use hmx_proto::{FrameError, Operation};

    use super::*;

    #[test]
    fn validation_maps_to_usage() {
        let err = matrix_error(
            "switch failed",
            MatrixError::Validation {
                kind: hmx_client::ArgKind::Port,
                value: 9,
                min: 1,
                max: 4,
            },
        );
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn timeout_maps_to_timeout_code() {
        let err = matrix_error(
            "route failed",
            MatrixError::Transport {
                op: Operation::QueryPort,
                source: TransportError::Io(io::Error::from(io::ErrorKind::TimedOut)),
            },
        );
        assert_eq!(err.code, TIMEOUT);
    }

    #[test]
    fn corrupt_response_maps_to_data_invalid() {
        let err = matrix_error(
            "route failed",
            MatrixError::Response {
                op: Operation::QueryPort,
                source: FrameError::Length { len: 12 },
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("route failed"));
    }
}
