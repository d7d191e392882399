use crate::error::FrameError;

/// Frame header bytes, constant in both directions.
pub const HEADER: [u8; 2] = [0xA5, 0x5B];

/// Command code width.
pub const CODE_LEN: usize = 2;

/// Data section width.
pub const PAYLOAD_LEN: usize = 8;

/// Total frame length: header + code + data + checksum.
pub const FRAME_LEN: usize = HEADER.len() + CODE_LEN + PAYLOAD_LEN + 1;

const CHECKSUM_BASE: i32 = 0x100;

/// Index of arg1 / the response result byte within the data section.
const ARG1_OFFSET: usize = 0;
/// Index of arg2 within the data section.
const ARG2_OFFSET: usize = 2;

/// Build a complete command frame.
///
/// `arg1` lands at data offset 0, `arg2` at data offset 2; the other
/// six data bytes are always zero. No argument range checks happen
/// here.
pub fn encode(code: [u8; 2], arg1: u8, arg2: u8) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[..HEADER.len()].copy_from_slice(&HEADER);
    frame[HEADER.len()..HEADER.len() + CODE_LEN].copy_from_slice(&code);
    frame[HEADER.len() + CODE_LEN + ARG1_OFFSET] = arg1;
    frame[HEADER.len() + CODE_LEN + ARG2_OFFSET] = arg2;
    frame[FRAME_LEN - 1] = checksum(&frame[..FRAME_LEN - 1]);
    frame
}

/// Compute the checksum byte over a frame body (everything before the
/// checksum position).
///
/// The device's algorithm is `0x100 - sum(bytes)`, and if that is
/// negative: add 255 until non-negative, then add 1 once. This is not
/// plain mod-256 arithmetic; for multi-byte sums the two diverge, and
/// the firmware expects this exact variant.
pub fn checksum(bytes: &[u8]) -> u8 {
    // Command frames always include the header (0xA5 + 0x5B = 0x100),
    // so the adjusted value fits in a byte here.
    checksum_value(bytes) as u8
}

fn checksum_value(bytes: &[u8]) -> i32 {
    let mut checksum = CHECKSUM_BASE - bytes.iter().map(|&b| i32::from(b)).sum::<i32>();
    if checksum < 0 {
        while checksum < 0 {
            checksum += 0xFF;
        }
        checksum += 1;
    }
    checksum
}

/// Whether `frame` is a structurally valid frame.
pub fn validate(frame: &[u8]) -> bool {
    decode(frame).is_ok()
}

/// Validate a response frame and return its 8-byte data section.
///
/// Length is checked before any checksum arithmetic. The comparison is
/// done in widened arithmetic so a degenerate recomputed value of
/// 0x100 (an all-zero body) can never alias a stored byte.
pub fn decode(frame: &[u8]) -> Result<&[u8], FrameError> {
    if frame.len() != FRAME_LEN {
        return Err(FrameError::Length { len: frame.len() });
    }
    let expected = checksum_value(&frame[..FRAME_LEN - 1]);
    let found = frame[FRAME_LEN - 1];
    if i32::from(found) != expected {
        return Err(FrameError::Checksum {
            expected: expected as u16,
            found,
        });
    }
    Ok(payload(frame))
}

/// The data section of an already-validated frame.
///
/// Callers must have run [`decode`]/[`validate`] first; slicing an
/// arbitrary byte string here is a contract violation.
pub fn payload(frame: &[u8]) -> &[u8] {
    &frame[HEADER.len() + CODE_LEN..FRAME_LEN - 1]
}
