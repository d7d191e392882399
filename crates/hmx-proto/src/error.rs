use crate::frame::FRAME_LEN;

/// Structural defects in a received frame.
///
/// These mean the read itself succeeded but the device (or the line)
/// produced bytes that do not form a valid frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The frame is not exactly [`FRAME_LEN`] bytes.
    #[error("wrong frame length ({len} bytes, expected {FRAME_LEN})")]
    Length { len: usize },

    /// The trailing checksum does not match the recomputed value.
    #[error("checksum mismatch (expected {expected:#04x}, found {found:#04x})")]
    Checksum { expected: u16, found: u8 },
}
