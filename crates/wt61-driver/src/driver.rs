//! The driver facade.

use wt61_protocol::{BaudRate, CalibrationCommand, OutputContent, OutputRate, Register, SaveCommand};

use crate::command::{CommandError, CommandTransmitter};
use crate::receiver::FrameReceiver;
use crate::state::SensorState;
use crate::transport::Transport;
use crate::watchdog::LinkWatchdog;

/// A WT61PC sensor on a transport.
///
/// Owns the transport, the sensor state, and the two protocol state
/// machines. The host wires up two triggers:
///
/// - the byte-arrival callback of its transport calls [`Wt61::on_byte`] for
///   every received byte;
/// - its periodic loop calls [`Wt61::poll`] with the current millisecond
///   tick, which advances any in-flight register write and runs the link
///   watchdog.
///
/// All entry points run to completion without blocking. If the two triggers
/// can preempt each other (byte arrival in an interrupt, poll in a main
/// loop), the host must serialize access to the driver.
pub struct Wt61<T: Transport> {
    transport: T,
    state: SensorState,
    receiver: FrameReceiver,
    transmitter: CommandTransmitter,
    watchdog: LinkWatchdog,
}

impl<T: Transport> Wt61<T> {
    /// Create a driver over `transport` and arm the first byte reception.
    pub fn new(mut transport: T) -> Self {
        transport.arm_receive();
        Wt61 {
            transport,
            state: SensorState::default(),
            receiver: FrameReceiver::new(),
            transmitter: CommandTransmitter::new(),
            watchdog: LinkWatchdog::new(),
        }
    }

    /// Handle one received byte at tick `now_ms`.
    ///
    /// Re-arms reception first (single-byte reception is not continuous),
    /// then feeds the byte to the frame receiver.
    pub fn on_byte(&mut self, byte: u8, now_ms: u32) {
        self.transport.arm_receive();
        self.receiver.on_byte(byte, now_ms, &mut self.state);
    }

    /// Advance the command transmitter and the link watchdog.
    ///
    /// Call at least once per protocol settling window (10 ms); calling more
    /// often is harmless.
    pub fn poll(&mut self, now_ms: u32) {
        self.transmitter.drive(now_ms, &mut self.transport);
        self.watchdog
            .check(now_ms, &self.state, &mut self.receiver, &mut self.transport);
    }

    /// Read access to the latest sensor readings and link health.
    pub fn state(&self) -> &SensorState {
        &self.state
    }

    /// Whether a register write sequence is currently in flight.
    pub fn is_command_in_flight(&self) -> bool {
        !self.transmitter.is_idle()
    }

    /// Save the configuration, restart, or factory-reset the sensor.
    pub fn save(&mut self, command: SaveCommand) -> Result<(), CommandError> {
        self.transmitter.issue(Register::Save, command.value())
    }

    /// Enter or leave a calibration mode.
    pub fn calibrate(&mut self, mode: CalibrationCommand) -> Result<(), CommandError> {
        self.transmitter.issue(Register::Calibration, mode.value())
    }

    /// Select which telemetry frame families the sensor emits.
    pub fn set_output_content(&mut self, content: OutputContent) -> Result<(), CommandError> {
        self.transmitter.issue(Register::OutputContent, content.bits())
    }

    /// Set the telemetry output rate.
    pub fn set_output_rate(&mut self, rate: OutputRate) -> Result<(), CommandError> {
        self.transmitter.issue(Register::OutputRate, rate.value())
    }

    /// Set the sensor's serial baud rate.
    ///
    /// Only the register write is issued here; reconfiguring the host
    /// transport to the new rate is the host's responsibility.
    pub fn set_baud_rate(&mut self, baud: BaudRate) -> Result<(), CommandError> {
        self.transmitter.issue(Register::BaudRate, baud.value())
    }
}
