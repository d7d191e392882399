use hmx_proto::{
    decode, encode, Operation, BEEP_OFF, BEEP_ON, EDID_MAX, EDID_MIN, FRAME_LEN, PORT_MAX,
    PORT_MIN,
};
use hmx_transport::Transport;
use tracing::{debug, error};

use crate::error::{ArgKind, MatrixError, Result};

/// Controls a 4x4 HDMI matrix switch over an injected byte transport.
///
/// Stateless between operations: each method is one independent
/// command, optionally followed by one 13-byte response. Not safe for
/// concurrent use; every method takes `&mut self`, and the host
/// application must serialize access if it shares a client.
pub struct MatrixClient<T> {
    transport: T,
}

impl<T: Transport> MatrixClient<T> {
    /// Wrap an open transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Consume the client and return the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Route `input_port` to `output_port`.
    pub fn change_port(&mut self, input_port: u8, output_port: u8) -> Result<()> {
        check_port(input_port)?;
        check_port(output_port)?;
        debug!(output_port, input_port, "changing output's input");
        self.command(Operation::ChangePort, input_port, output_port)
    }

    /// Query which input currently feeds `output_port`.
    pub fn query_port(&mut self, output_port: u8) -> Result<u8> {
        check_port(output_port)?;
        let result = self.query(Operation::QueryPort, output_port, 0)?;
        debug!(output_port, input_port = result, "input routed to output");
        Ok(result)
    }

    /// Set `input_port`'s emulated EDID profile.
    pub fn set_edid(&mut self, input_port: u8, value: u8) -> Result<()> {
        check_port(input_port)?;
        check_edid(value)?;
        debug!(input_port, value, "setting EDID profile");
        self.command(Operation::SetEdid, value, input_port)
    }

    /// Set every input's emulated EDID profile.
    pub fn set_edid_to_all(&mut self, value: u8) -> Result<()> {
        check_edid(value)?;
        debug!(value, "setting EDID profile on all inputs");
        self.command(Operation::SetEdidToAll, value, 0)
    }

    /// Copy the connected display's EDID from `output_port` to
    /// `input_port`.
    pub fn copy_edid(&mut self, output_port: u8, input_port: u8) -> Result<()> {
        check_port(output_port)?;
        check_port(input_port)?;
        debug!(output_port, input_port, "copying EDID to input");
        self.command(Operation::CopyEdid, output_port, input_port)
    }

    /// Copy the connected display's EDID from `output_port` to every
    /// input.
    pub fn copy_edid_to_all(&mut self, output_port: u8) -> Result<()> {
        check_port(output_port)?;
        debug!(output_port, "copying EDID to all inputs");
        self.command(Operation::CopyEdidToAll, output_port, 0)
    }

    /// Query hot-plug detect on `output_port`. `true` means a display
    /// is holding HPD high.
    pub fn query_hdp(&mut self, output_port: u8) -> Result<bool> {
        check_port(output_port)?;
        // Device reports 0 for high.
        let high = self.query(Operation::QueryHdp, output_port, 0)? == 0;
        debug!(output_port, high, "hot-plug detect state");
        Ok(high)
    }

    /// Query whether a source is connected on `input_port`.
    pub fn query_status(&mut self, input_port: u8) -> Result<bool> {
        check_port(input_port)?;
        // Opposite polarity to query_hdp: nonzero means connected.
        let connected = self.query(Operation::QueryStatus, input_port, 0)? != 0;
        debug!(input_port, connected, "cable status");
        Ok(connected)
    }

    /// Enable or disable the confirmation beep.
    pub fn set_beep(&mut self, enable: bool) -> Result<()> {
        debug!(enable, "setting beep");
        let value = if enable { BEEP_ON } else { BEEP_OFF };
        self.command(Operation::SetBeep, value, 0)
    }

    /// Query whether the confirmation beep is enabled.
    pub fn query_beep(&mut self) -> Result<bool> {
        // Device reports 0 for enabled.
        let enabled = self.query(Operation::QueryBeep, 0, 0)? == 0;
        debug!(enabled, "beep state");
        Ok(enabled)
    }

    /// Send a command that produces no response.
    fn command(&mut self, op: Operation, arg1: u8, arg2: u8) -> Result<()> {
        let frame = encode(op.code(), arg1, arg2);
        debug!(%op, frame = %hex(&frame), "sending command");
        self.transport
            .write(&frame)
            .map_err(|source| MatrixError::Transport { op, source })
    }

    /// Send a command and decode the result byte of its response.
    fn query(&mut self, op: Operation, arg1: u8, arg2: u8) -> Result<u8> {
        self.command(op, arg1, arg2)?;

        let response = self
            .transport
            .read(FRAME_LEN)
            .map_err(|source| MatrixError::Transport { op, source })?;

        match decode(&response) {
            Ok(data) => {
                debug!(%op, response = %hex(&response), "received response");
                Ok(data[0])
            }
            Err(source) => {
                error!(%op, response = %hex(&response), "invalid response");
                Err(MatrixError::Response { op, source })
            }
        }
    }
}

fn check_port(port: u8) -> Result<()> {
    if !(PORT_MIN..=PORT_MAX).contains(&port) {
        error!(port, "invalid port number");
        return Err(MatrixError::Validation {
            kind: ArgKind::Port,
            value: port,
            min: PORT_MIN,
            max: PORT_MAX,
        });
    }
    Ok(())
}

fn check_edid(value: u8) -> Result<()> {
    if !(EDID_MIN..=EDID_MAX).contains(&value) {
        error!(value, "invalid EDID value");
        return Err(MatrixError::Validation {
            kind: ArgKind::Edid,
            value,
            min: EDID_MIN,
            max: EDID_MAX,
        });
    }
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
