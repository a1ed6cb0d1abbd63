//! The register-write command transmitter.
//!
//! The sensor only accepts a register write as the second frame of a
//! protected sequence: a fixed unlock frame, a settling window of at least
//! [`REGISTER_WRITE_SETTLE_MS`] ticks, the command frame, and the same
//! window again before the next sequence may start. The transmitter holds at
//! most one command in flight and is advanced by periodic
//! [`drive`](CommandTransmitter::drive) calls from the host loop.

use log::debug;
use thiserror::Error;
use wt61_protocol::{encode_register_write, Register, REGISTER_WRITE_SETTLE_MS, UNLOCK_FRAME};

use crate::transport::Transport;

/// Errors reported when issuing a register write.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// A register write sequence is already in flight.
    #[error("a register write is already in flight")]
    Busy,
}

/// Progress of the in-flight write sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxStage {
    /// No command in flight.
    #[default]
    Idle,
    /// Command accepted, unlock frame not yet transmitted.
    UnlockPending,
    /// Unlock frame transmitted, settling before the command frame.
    UnlockSent,
    /// Command frame transmitted, settling before returning to idle.
    CommandSent,
}

/// Serializes register writes into the unlock/command sequence.
///
/// The sequence is fire-and-forget: no acknowledgment is read back, and a
/// completed sequence simply returns the transmitter to idle.
#[derive(Debug, Default)]
pub struct CommandTransmitter {
    stage: TxStage,
    /// The stored 5-byte command frame for the in-flight write.
    frame: Vec<u8>,
    /// Tick of the most recent transmission.
    sent_at_ms: u32,
}

impl CommandTransmitter {
    /// Create a new, idle transmitter.
    pub fn new() -> Self {
        CommandTransmitter::default()
    }

    /// Whether no write sequence is in flight.
    pub fn is_idle(&self) -> bool {
        self.stage == TxStage::Idle
    }

    /// Current sequence stage.
    pub fn stage(&self) -> TxStage {
        self.stage
    }

    /// Accept a register write for transmission.
    ///
    /// Fails with [`CommandError::Busy`] while a previous sequence is in
    /// flight; the in-flight command is never overwritten or queued behind.
    pub fn issue(&mut self, register: Register, value: u16) -> Result<(), CommandError> {
        if self.stage != TxStage::Idle {
            return Err(CommandError::Busy);
        }

        self.frame = encode_register_write(register.code(), value);
        self.stage = TxStage::UnlockPending;
        debug!("queued write of 0x{value:04X} to register {register:?}");
        Ok(())
    }

    /// Advance the write sequence.
    ///
    /// Call periodically from the host loop, at least once per settling
    /// window. Extra calls are harmless; sparse calls only delay progress.
    pub fn drive<T: Transport>(&mut self, now_ms: u32, transport: &mut T) {
        match self.stage {
            TxStage::Idle => {}
            TxStage::UnlockPending => {
                transport.send(&UNLOCK_FRAME);
                self.sent_at_ms = now_ms;
                self.stage = TxStage::UnlockSent;
                debug!("unlock frame sent");
            }
            TxStage::UnlockSent => {
                if now_ms.wrapping_sub(self.sent_at_ms) >= REGISTER_WRITE_SETTLE_MS {
                    transport.send(&self.frame);
                    self.sent_at_ms = now_ms;
                    self.stage = TxStage::CommandSent;
                    debug!("command frame sent");
                }
            }
            TxStage::CommandSent => {
                if now_ms.wrapping_sub(self.sent_at_ms) >= REGISTER_WRITE_SETTLE_MS {
                    self.stage = TxStage::Idle;
                    debug!("register write complete");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Vec<Vec<u8>>,
    }

    impl Transport for RecordingTransport {
        fn send(&mut self, frame: &[u8]) {
            self.sent.push(frame.to_vec());
        }

        fn arm_receive(&mut self) {}
    }

    #[test]
    fn test_full_sequence_sends_unlock_then_command() {
        let mut tx = CommandTransmitter::new();
        let mut transport = RecordingTransport::default();

        tx.issue(Register::OutputRate, 0x0009).expect("should accept");
        assert_eq!(tx.stage(), TxStage::UnlockPending);

        tx.drive(0, &mut transport);
        assert_eq!(tx.stage(), TxStage::UnlockSent);

        tx.drive(10, &mut transport);
        assert_eq!(tx.stage(), TxStage::CommandSent);

        tx.drive(20, &mut transport);
        assert!(tx.is_idle());

        assert_eq!(
            transport.sent,
            vec![UNLOCK_FRAME.to_vec(), vec![0xFF, 0xAA, 0x03, 0x09, 0x00]]
        );
    }

    #[test]
    fn test_drive_respects_settling_windows() {
        let mut tx = CommandTransmitter::new();
        let mut transport = RecordingTransport::default();

        tx.issue(Register::Save, 0x0000).expect("should accept");
        tx.drive(100, &mut transport);

        // Too early for the command frame
        tx.drive(105, &mut transport);
        tx.drive(109, &mut transport);
        assert_eq!(tx.stage(), TxStage::UnlockSent);
        assert_eq!(transport.sent.len(), 1);

        tx.drive(110, &mut transport);
        assert_eq!(tx.stage(), TxStage::CommandSent);

        // Too early to complete
        tx.drive(115, &mut transport);
        assert_eq!(tx.stage(), TxStage::CommandSent);

        tx.drive(120, &mut transport);
        assert!(tx.is_idle());
        assert_eq!(transport.sent.len(), 2);
    }

    #[test]
    fn test_busy_preserves_in_flight_command() {
        let mut tx = CommandTransmitter::new();
        let mut transport = RecordingTransport::default();

        tx.issue(Register::BaudRate, 0x0006).expect("should accept");
        assert_eq!(
            tx.issue(Register::Save, 0x00FF),
            Err(CommandError::Busy)
        );

        // The rejected issue did not clobber the first command's payload
        tx.drive(0, &mut transport);
        tx.drive(10, &mut transport);
        assert_eq!(transport.sent[1], vec![0xFF, 0xAA, 0x04, 0x06, 0x00]);
    }

    #[test]
    fn test_idle_after_completion_accepts_next_command() {
        let mut tx = CommandTransmitter::new();
        let mut transport = RecordingTransport::default();

        tx.issue(Register::Save, 0x0000).expect("should accept");
        tx.drive(0, &mut transport);
        tx.drive(10, &mut transport);
        tx.drive(20, &mut transport);

        tx.issue(Register::Calibration, 0x0001)
            .expect("idle transmitter should accept");
    }

    #[test]
    fn test_drive_without_command_does_nothing() {
        let mut tx = CommandTransmitter::new();
        let mut transport = RecordingTransport::default();

        tx.drive(0, &mut transport);
        tx.drive(1000, &mut transport);

        assert!(tx.is_idle());
        assert!(transport.sent.is_empty());
    }
}
