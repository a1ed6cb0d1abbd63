//! The sensor state record.

use serde::{Deserialize, Serialize};
use wt61_protocol::{Axes, TELEMETRY_FRAME_LEN};

use crate::watchdog::LINK_TIMEOUT_MS;

/// Latest known sensor readings and link health.
///
/// Every field holds the value from the most recently *validated* frame of
/// its family; rejected frames never update anything. The record is mutated
/// only by the driver's frame receiver; consumers get read access through
/// [`Wt61::state`](crate::Wt61::state).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorState {
    /// Acceleration per axis in g.
    pub acceleration: Axes,
    /// Angular velocity per axis in deg/s.
    pub angular_velocity: Axes,
    /// Angle position per axis in deg.
    pub angle: Axes,
    /// Magnetic field per axis in raw counts.
    pub magnetic_field: Axes,
    /// Die temperature in °C.
    pub temperature: f32,
    /// Supply voltage in V.
    pub voltage: f32,
    /// Firmware version number.
    pub version: u16,
    /// Tick at which the last valid frame was received.
    pub last_frame_ms: u32,
    /// Elapsed ticks between the two most recent angle frames.
    pub angle_period_ms: u32,
    /// Raw bytes of the most recent register-read echo, if any.
    pub register_echo: Option<[u8; TELEMETRY_FRAME_LEN]>,
}

impl SensorState {
    /// Whether the link has gone silent: no valid frame within the watchdog
    /// timeout window as of `now_ms`.
    pub fn is_stale(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_frame_ms) >= LINK_TIMEOUT_MS
    }
}
