//! Frame reception: byte stream in, state updates out.

use log::trace;
use wt61_protocol::{FrameAssembler, Telemetry};

use crate::state::SensorState;

/// Assembles frames from the byte stream and applies validated telemetry to
/// the sensor state.
///
/// Reception is a streaming decoder, not a request/response API: malformed
/// bytes and checksum failures are dropped without surfacing an error. A
/// persistently corrupt link is only observable as a stale
/// [`SensorState::last_frame_ms`], which the watchdog acts on.
#[derive(Debug, Default)]
pub struct FrameReceiver {
    assembler: FrameAssembler,
    /// Tick of the previous angle frame, for period tracking.
    last_angle_ms: Option<u32>,
}

impl FrameReceiver {
    /// Create a new receiver.
    pub fn new() -> Self {
        FrameReceiver::default()
    }

    /// Feed one received byte, updating `state` if the byte completes a
    /// valid frame.
    pub fn on_byte(&mut self, byte: u8, now_ms: u32, state: &mut SensorState) {
        let frame = match self.assembler.push(byte) {
            Some(frame) => frame,
            None => return,
        };

        match Telemetry::decode(&frame) {
            Ok(telemetry) => self.apply(telemetry, now_ms, state),
            Err(err) => trace!("dropping frame: {err}"),
        }
    }

    /// Apply one validated frame to the state.
    fn apply(&mut self, telemetry: Telemetry, now_ms: u32, state: &mut SensorState) {
        match telemetry {
            Telemetry::Acceleration { accel, temperature } => {
                state.acceleration = accel;
                state.temperature = temperature;
            }
            Telemetry::AngularVelocity { gyro, voltage } => {
                state.angular_velocity = gyro;
                state.voltage = voltage;
            }
            Telemetry::Angle { angle, version } => {
                state.angle = angle;
                state.version = version;
                if let Some(previous) = self.last_angle_ms {
                    state.angle_period_ms = now_ms.wrapping_sub(previous);
                }
                self.last_angle_ms = Some(now_ms);
            }
            Telemetry::MagneticField { mag, temperature } => {
                state.magnetic_field = mag;
                state.temperature = temperature;
            }
            Telemetry::RegisterEcho { raw } => {
                state.register_echo = Some(raw);
            }
            Telemetry::Unrecognized { code } => {
                trace!("ignoring frame with unhandled code 0x{code:02X}");
            }
        }

        // Any frame that passed validation proves the link is alive
        state.last_frame_ms = now_ms;
    }

    /// Discard any partially assembled frame and resume sync hunting.
    pub fn reset(&mut self) {
        self.assembler.reset();
    }

    /// Number of bytes collected toward the frame in progress.
    pub fn pending(&self) -> usize {
        self.assembler.pending()
    }
}
