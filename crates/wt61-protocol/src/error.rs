//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when decoding WT61PC frames.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Frame is too short to be valid.
    #[error("frame too short: expected {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected frame length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// Frame does not start with the sync byte.
    #[error("bad sync byte: 0x{0:02X}")]
    BadSync(u8),

    /// Frame checksum does not match its contents.
    #[error("checksum mismatch: computed 0x{expected:02X}, frame carries 0x{actual:02X}")]
    ChecksumMismatch {
        /// Checksum computed over the frame contents.
        expected: u8,
        /// Checksum byte carried by the frame.
        actual: u8,
    },
}
