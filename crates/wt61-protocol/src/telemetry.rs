//! Telemetry frames emitted by the sensor.

use crate::constants::*;
use crate::error::ProtocolError;
use crate::frame::checksum;
use crate::types::Axes;

/// Acceleration full-scale range in g.
const ACCEL_RANGE: f32 = 16.0;
/// Angular velocity full-scale range in deg/s.
const GYRO_RANGE: f32 = 2000.0;
/// Angle position full-scale range in deg.
const ANGLE_RANGE: f32 = 180.0;
/// Divisor mapping raw counts to temperature (°C) and voltage (V).
const CENTI_SCALE: f32 = 100.0;

/// One validated telemetry frame, decoded into physical quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Telemetry {
    /// Acceleration report (code 0x51).
    Acceleration {
        /// Acceleration per axis in g.
        accel: Axes,
        /// Die temperature in °C.
        temperature: f32,
    },

    /// Angular velocity report (code 0x52).
    AngularVelocity {
        /// Angular velocity per axis in deg/s.
        gyro: Axes,
        /// Supply voltage in V.
        voltage: f32,
    },

    /// Angle position report (code 0x53).
    Angle {
        /// Angle position per axis in deg.
        angle: Axes,
        /// Firmware version number.
        version: u16,
    },

    /// Magnetic field report (code 0x54). Field values are raw counts.
    MagneticField {
        /// Magnetic field per axis, unscaled.
        mag: Axes,
        /// Die temperature in °C.
        temperature: f32,
    },

    /// Register-read echo (code 0x5F), carried verbatim.
    RegisterEcho {
        /// The raw 11-byte frame as received.
        raw: [u8; TELEMETRY_FRAME_LEN],
    },

    /// A frame with a valid checksum but an unhandled type code.
    Unrecognized {
        /// The frame's type code byte.
        code: u8,
    },
}

impl Telemetry {
    /// Decode a telemetry frame.
    ///
    /// Validates the sync byte and checksum, then dispatches on the type
    /// code. Frames with a valid checksum but an unknown code decode to
    /// [`Telemetry::Unrecognized`]; they count as successful reception.
    pub fn decode(frame: &[u8]) -> Result<Self, ProtocolError> {
        if frame.len() < TELEMETRY_FRAME_LEN {
            return Err(ProtocolError::FrameTooShort {
                expected: TELEMETRY_FRAME_LEN,
                actual: frame.len(),
            });
        }

        if frame[0] != SYNC_BYTE {
            return Err(ProtocolError::BadSync(frame[0]));
        }

        let expected = checksum(&frame[..10]);
        if expected != frame[10] {
            return Err(ProtocolError::ChecksumMismatch {
                expected,
                actual: frame[10],
            });
        }

        let telemetry = match frame[1] {
            FRAME_ACCELERATION => Telemetry::Acceleration {
                accel: decode_axes(frame, ACCEL_RANGE),
                temperature: decode_aux(frame) as f32 / CENTI_SCALE,
            },
            FRAME_ANGULAR_VELOCITY => Telemetry::AngularVelocity {
                gyro: decode_axes(frame, GYRO_RANGE),
                voltage: decode_aux(frame) as f32 / CENTI_SCALE,
            },
            FRAME_ANGLE => Telemetry::Angle {
                angle: decode_axes(frame, ANGLE_RANGE),
                version: u16::from_le_bytes([frame[8], frame[9]]),
            },
            FRAME_MAGNETIC_FIELD => Telemetry::MagneticField {
                mag: decode_axes(frame, f32::from(i16::MAX) + 1.0),
                temperature: decode_aux(frame) as f32 / CENTI_SCALE,
            },
            FRAME_REGISTER_ECHO => {
                let mut raw = [0u8; TELEMETRY_FRAME_LEN];
                raw.copy_from_slice(&frame[..TELEMETRY_FRAME_LEN]);
                Telemetry::RegisterEcho { raw }
            }
            code => Telemetry::Unrecognized { code },
        };

        Ok(telemetry)
    }
}

/// Reconstruct the three payload axes, scaling raw counts to `range` full
/// scale. A `range` equal to one raw step above `i16::MAX` leaves the value
/// in raw counts (used by the magnetometer frame).
fn decode_axes(frame: &[u8], range: f32) -> Axes {
    let scale = range / (f32::from(i16::MAX) + 1.0);
    Axes {
        x: f32::from(i16::from_le_bytes([frame[2], frame[3]])) * scale,
        y: f32::from(i16::from_le_bytes([frame[4], frame[5]])) * scale,
        z: f32::from(i16::from_le_bytes([frame[6], frame[7]])) * scale,
    }
}

/// Reconstruct the auxiliary value in bytes 8–9 (temperature or voltage).
fn decode_aux(frame: &[u8]) -> i16 {
    i16::from_le_bytes([frame[8], frame[9]])
}
