//! Protocol constants
//!
//! These constants define the frame type codes, frame geometry, and fixed
//! byte sequences of the WT61PC serial protocol.

// ============================================================================
// Frame Geometry
// ============================================================================

/// Leading byte of every telemetry frame.
pub const SYNC_BYTE: u8 = 0x55;

/// Total length of a telemetry frame, checksum included.
pub const TELEMETRY_FRAME_LEN: usize = 11;

/// Total length of a host→sensor command frame.
pub const COMMAND_FRAME_LEN: usize = 5;

/// Header bytes of every host→sensor command frame.
pub const COMMAND_HEADER: [u8; 2] = [0xFF, 0xAA];

/// Fixed unlock frame that must precede a register write.
pub const UNLOCK_FRAME: [u8; COMMAND_FRAME_LEN] = [0xFF, 0xAA, 0x69, 0x88, 0xB5];

/// Minimum settling time in milliseconds between the unlock frame, the
/// command frame, and the next write sequence.
pub const REGISTER_WRITE_SETTLE_MS: u32 = 10;

// ============================================================================
// Telemetry Frame Codes (sensor → host)
// ============================================================================

/// Time report.
pub const FRAME_TIME: u8 = 0x50;
/// Acceleration report (3 axes in g, plus temperature).
pub const FRAME_ACCELERATION: u8 = 0x51;
/// Angular velocity report (3 axes in deg/s, plus supply voltage).
pub const FRAME_ANGULAR_VELOCITY: u8 = 0x52;
/// Angle position report (3 axes in deg, plus firmware version).
pub const FRAME_ANGLE: u8 = 0x53;
/// Magnetic field report (3 axes, raw counts, plus temperature).
pub const FRAME_MAGNETIC_FIELD: u8 = 0x54;
/// Port status report.
pub const FRAME_PORT_STATUS: u8 = 0x55;
/// Barometric pressure report.
pub const FRAME_PRESSURE: u8 = 0x56;
/// GPS position report.
pub const FRAME_GPS: u8 = 0x57;
/// Ground velocity report.
pub const FRAME_VELOCITY: u8 = 0x58;
/// Quaternion report.
pub const FRAME_QUATERNION: u8 = 0x59;
/// GPS accuracy report.
pub const FRAME_GSA: u8 = 0x5A;
/// Register-read echo.
pub const FRAME_REGISTER_ECHO: u8 = 0x5F;
