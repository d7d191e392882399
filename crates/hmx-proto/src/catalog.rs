use std::fmt;

/// Lowest valid input/output port number.
pub const PORT_MIN: u8 = 1;
/// Highest valid input/output port number.
pub const PORT_MAX: u8 = 4;

/// Wire byte enabling the confirmation beep.
pub const BEEP_ON: u8 = 0x0F;
/// Wire byte disabling the confirmation beep.
pub const BEEP_OFF: u8 = 0xF0;

// EDID emulation profiles the matrix can present to a source device.
// Audio suffixes: 2.0, 5.1, 7.1 channel layouts.
pub const EDID_1080I_20: u8 = 1;
pub const EDID_1080I_51: u8 = 2;
pub const EDID_1080I_71: u8 = 3;
pub const EDID_1080P_20: u8 = 4;
pub const EDID_1080P_51: u8 = 5;
pub const EDID_1080P_71: u8 = 6;
pub const EDID_3D_20: u8 = 7;
pub const EDID_3D_51: u8 = 8;
pub const EDID_3D_71: u8 = 9;
pub const EDID_4K2K_20: u8 = 10;
pub const EDID_4K2K_51: u8 = 11;
pub const EDID_4K2K_71: u8 = 12;
pub const EDID_DVI_1024_768: u8 = 13;
pub const EDID_DVI_1920_1080: u8 = 14;
pub const EDID_DVI_1920_1200: u8 = 15;

/// Lowest valid EDID profile identifier.
pub const EDID_MIN: u8 = EDID_1080I_20;
/// Highest valid EDID profile identifier.
pub const EDID_MAX: u8 = EDID_DVI_1920_1200;

/// Every operation the matrix understands.
///
/// One entry per protocol command; the wire code, argument slots, and
/// response semantics are fixed per operation. Queries report their
/// result in response payload byte 0, with per-operation polarity:
/// `QueryHdp` and `QueryBeep` report 0 as "yes", `QueryStatus` reports
/// nonzero as "connected". The asymmetry is the device's, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Route an input to an output. Args: input port, output port.
    ChangePort,
    /// Query which input feeds an output. Arg: output port.
    QueryPort,
    /// Set an input's EDID profile. Args: EDID value, input port.
    SetEdid,
    /// Set every input's EDID profile. Arg: EDID value.
    SetEdidToAll,
    /// Copy a display's EDID from an output to an input. Args: output
    /// port, input port.
    CopyEdid,
    /// Copy a display's EDID from an output to every input. Arg:
    /// output port.
    CopyEdidToAll,
    /// Query hot-plug detect on an output. Arg: output port.
    QueryHdp,
    /// Query cable presence on an input. Arg: input port.
    QueryStatus,
    /// Enable or disable the confirmation beep. Arg: beep wire byte.
    SetBeep,
    /// Query whether the confirmation beep is enabled. No args.
    QueryBeep,
}

impl Operation {
    /// The 2-byte wire command code.
    pub const fn code(self) -> [u8; 2] {
        match self {
            Operation::ChangePort => [0x02, 0x03],
            Operation::QueryPort => [0x02, 0x01],
            Operation::SetEdid => [0x03, 0x02],
            Operation::SetEdidToAll => [0x03, 0x01],
            Operation::CopyEdid => [0x03, 0x04],
            Operation::CopyEdidToAll => [0x03, 0x03],
            Operation::QueryHdp => [0x01, 0x05],
            Operation::QueryStatus => [0x01, 0x04],
            Operation::SetBeep => [0x06, 0x01],
            Operation::QueryBeep => [0x01, 0x0B],
        }
    }

    /// Whether the device answers this operation with a response frame.
    pub const fn has_response(self) -> bool {
        matches!(
            self,
            Operation::QueryPort
                | Operation::QueryHdp
                | Operation::QueryStatus
                | Operation::QueryBeep
        )
    }

    /// Stable operation name, used in logs and error context.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::ChangePort => "change_port",
            Operation::QueryPort => "query_port",
            Operation::SetEdid => "set_edid",
            Operation::SetEdidToAll => "set_edid_to_all",
            Operation::CopyEdid => "copy_edid",
            Operation::CopyEdidToAll => "copy_edid_to_all",
            Operation::QueryHdp => "query_hdp",
            Operation::QueryStatus => "query_status",
            Operation::SetBeep => "set_beep",
            Operation::QueryBeep => "query_beep",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Operation; 10] = [
        Operation::ChangePort,
        Operation::QueryPort,
        Operation::SetEdid,
        Operation::SetEdidToAll,
        Operation::CopyEdid,
        Operation::CopyEdidToAll,
        Operation::QueryHdp,
        Operation::QueryStatus,
        Operation::SetBeep,
        Operation::QueryBeep,
    ];

    #[test]
    fn codes_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.code(), b.code(), "{a} and {b} share a code");
            }
        }
    }

    #[test]
    fn queries_expect_responses_commands_do_not() {
        assert!(Operation::QueryPort.has_response());
        assert!(Operation::QueryHdp.has_response());
        assert!(Operation::QueryStatus.has_response());
        assert!(Operation::QueryBeep.has_response());
        assert!(!Operation::ChangePort.has_response());
        assert!(!Operation::SetEdid.has_response());
        assert!(!Operation::SetBeep.has_response());
    }

    #[test]
    fn display_matches_wire_documentation() {
        assert_eq!(Operation::ChangePort.to_string(), "change_port");
        assert_eq!(Operation::QueryHdp.to_string(), "query_hdp");
    }

    #[test]
    fn edid_range_covers_all_profiles() {
        assert_eq!(EDID_MIN, 1);
        assert_eq!(EDID_MAX, 15);
    }
}
