//! Frame assembly and encoding utilities.
//!
//! The sensor emits telemetry as a continuous byte stream with no explicit
//! terminators; frames are delimited purely by position. The assembler in
//! this module reconstructs 11-byte frames from single received bytes,
//! hunting for the sync byte whenever it is between frames.
//!
//! ```text
//! +------+------+-------------------------------+----------+
//! | 0x55 | code | d0 d1 d2 d3 d4 d5 d6 d7       | checksum |
//! +------+------+-------------------------------+----------+
//! ```

use bytes::BufMut;

use crate::constants::*;

/// Compute the truncating 8-bit sum checksum over the given bytes.
///
/// For a telemetry frame this is taken over the first ten bytes and compared
/// against the eleventh.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Reconstructs fixed-size telemetry frames from a byte-at-a-time stream.
///
/// Bytes received while the buffer is empty are discarded until the sync
/// byte arrives. When the eleventh byte lands, the completed frame is
/// returned and the cursor resets immediately, so a frame the caller later
/// rejects never stalls the framing of subsequent bytes.
#[derive(Debug, Default)]
pub struct FrameAssembler {
    /// In-progress frame storage.
    frame: [u8; TELEMETRY_FRAME_LEN],
    /// Fill cursor, 0..=11.
    cursor: usize,
}

impl FrameAssembler {
    /// Create a new, empty assembler.
    pub fn new() -> Self {
        FrameAssembler::default()
    }

    /// Feed one received byte.
    ///
    /// Returns `Some(frame)` when the byte completes an 11-byte frame. The
    /// returned frame has not been validated; callers are expected to run it
    /// through [`Telemetry::decode`](crate::Telemetry::decode).
    pub fn push(&mut self, byte: u8) -> Option<[u8; TELEMETRY_FRAME_LEN]> {
        if self.cursor == 0 && byte != SYNC_BYTE {
            return None;
        }

        self.frame[self.cursor] = byte;
        self.cursor += 1;

        if self.cursor == TELEMETRY_FRAME_LEN {
            self.cursor = 0;
            return Some(self.frame);
        }

        None
    }

    /// Number of bytes collected toward the current frame.
    pub fn pending(&self) -> usize {
        self.cursor
    }

    /// Discard any partially collected frame and resume sync hunting.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Encode a register write command frame.
///
/// Format: `FF AA <register> <value_lo> <value_hi>`. The sensor only honors
/// this frame when it was preceded by [`UNLOCK_FRAME`] within the protocol's
/// settling window.
pub fn encode_register_write(register: u8, value: u16) -> Vec<u8> {
    let mut buf = Vec::with_capacity(COMMAND_FRAME_LEN);
    buf.put_slice(&COMMAND_HEADER);
    buf.put_u8(register);
    buf.put_u16_le(value);
    buf
}
