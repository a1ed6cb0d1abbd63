//! Configuration registers and their legal command values.
//!
//! Registers are written with the protected two-frame sequence (unlock, then
//! `FF AA <register> <value>`); see [`crate::encode_register_write`] and
//! [`crate::UNLOCK_FRAME`].

use std::ops::{BitOr, BitOrAssign};

/// Writable configuration registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// Save configuration, restart, or factory reset.
    Save = 0x00,
    /// Calibration mode.
    Calibration = 0x01,
    /// Output content mask (which frame families the sensor emits).
    OutputContent = 0x02,
    /// Telemetry output rate.
    OutputRate = 0x03,
    /// Serial baud rate.
    BaudRate = 0x04,
}

impl Register {
    /// The register's wire address.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Command values for the [`Register::Save`] register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveCommand {
    /// Persist the current configuration.
    Save = 0x0000,
    /// Restore factory defaults.
    FactoryReset = 0x0001,
    /// Restart the sensor.
    Restart = 0x00FF,
}

/// Command values for the [`Register::Calibration`] register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationCommand {
    /// Leave calibration mode.
    Normal = 0x0000,
    /// Automatic accelerometer calibration.
    AccelAuto = 0x0001,
    /// Reset height to zero.
    HeightReset = 0x0003,
    /// Zero the heading.
    HeadingZero = 0x0004,
    /// Spherical magnetic field calibration.
    MagSpherical = 0x0007,
    /// Set the current attitude as the angle reference.
    SetAngleReference = 0x0008,
    /// Dual-plane magnetic field calibration.
    MagDualPlane = 0x0009,
}

/// Command values for the [`Register::OutputRate`] register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRate {
    /// 0.2 Hz.
    Hz0_2 = 0x0001,
    /// 0.5 Hz.
    Hz0_5 = 0x0002,
    /// 1 Hz.
    Hz1 = 0x0003,
    /// 2 Hz.
    Hz2 = 0x0004,
    /// 5 Hz.
    Hz5 = 0x0005,
    /// 10 Hz.
    Hz10 = 0x0006,
    /// 20 Hz.
    Hz20 = 0x0007,
    /// 50 Hz.
    Hz50 = 0x0008,
    /// 100 Hz.
    Hz100 = 0x0009,
    /// 200 Hz.
    Hz200 = 0x000B,
    /// Emit one frame set on request.
    SingleReturn = 0x000C,
    /// Stop emitting telemetry.
    NoReturn = 0x000D,
}

/// Command values for the [`Register::BaudRate`] register.
///
/// Changing the baud rate takes effect on the sensor side immediately; the
/// host transport must be reconfigured to match before reception resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudRate {
    /// 4800 baud.
    Baud4800 = 0x0001,
    /// 9600 baud.
    Baud9600 = 0x0002,
    /// 19200 baud.
    Baud19200 = 0x0003,
    /// 38400 baud.
    Baud38400 = 0x0004,
    /// 57600 baud.
    Baud57600 = 0x0005,
    /// 115200 baud.
    Baud115200 = 0x0006,
    /// 230400 baud.
    Baud230400 = 0x0007,
    /// 460800 baud. Not supported by all sensor revisions.
    Baud460800 = 0x0008,
    /// 921600 baud. Not supported by all sensor revisions.
    Baud921600 = 0x0009,
}

impl SaveCommand {
    /// The command's 16-bit wire value.
    pub fn value(self) -> u16 {
        self as u16
    }
}

impl CalibrationCommand {
    /// The command's 16-bit wire value.
    pub fn value(self) -> u16 {
        self as u16
    }
}

impl OutputRate {
    /// The command's 16-bit wire value.
    pub fn value(self) -> u16 {
        self as u16
    }
}

impl BaudRate {
    /// The command's 16-bit wire value.
    pub fn value(self) -> u16 {
        self as u16
    }
}

/// Bitmask written to [`Register::OutputContent`], one bit per telemetry
/// frame family.
///
/// Masks combine with `|`:
///
/// ```rust
/// use wt61_protocol::OutputContent;
///
/// let content = OutputContent::ACCELERATION | OutputContent::ANGLE;
/// assert!(content.contains(OutputContent::ANGLE));
/// assert!(!content.contains(OutputContent::GPS));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputContent(u16);

impl OutputContent {
    /// Time frames (0x50).
    pub const TIME: OutputContent = OutputContent(1 << 0);
    /// Acceleration frames (0x51).
    pub const ACCELERATION: OutputContent = OutputContent(1 << 1);
    /// Angular velocity frames (0x52).
    pub const ANGULAR_VELOCITY: OutputContent = OutputContent(1 << 2);
    /// Angle position frames (0x53).
    pub const ANGLE: OutputContent = OutputContent(1 << 3);
    /// Magnetic field frames (0x54).
    pub const MAGNETIC_FIELD: OutputContent = OutputContent(1 << 4);
    /// Port status frames (0x55).
    pub const PORT_STATUS: OutputContent = OutputContent(1 << 5);
    /// Pressure frames (0x56).
    pub const PRESSURE: OutputContent = OutputContent(1 << 6);
    /// GPS position frames (0x57).
    pub const GPS: OutputContent = OutputContent(1 << 7);
    /// Ground velocity frames (0x58).
    pub const VELOCITY: OutputContent = OutputContent(1 << 8);
    /// Quaternion frames (0x59).
    pub const QUATERNION: OutputContent = OutputContent(1 << 9);
    /// GPS accuracy frames (0x5A).
    pub const GSA: OutputContent = OutputContent(1 << 10);

    /// A mask selecting no telemetry at all.
    pub const fn empty() -> Self {
        OutputContent(0)
    }

    /// The mask's 16-bit wire value.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Whether every family in `other` is selected in `self`.
    pub fn contains(self, other: OutputContent) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for OutputContent {
    type Output = OutputContent;

    fn bitor(self, rhs: OutputContent) -> OutputContent {
        OutputContent(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutputContent {
    fn bitor_assign(&mut self, rhs: OutputContent) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_codes() {
        assert_eq!(Register::Save.code(), 0x00);
        assert_eq!(Register::Calibration.code(), 0x01);
        assert_eq!(Register::OutputContent.code(), 0x02);
        assert_eq!(Register::OutputRate.code(), 0x03);
        assert_eq!(Register::BaudRate.code(), 0x04);
    }

    #[test]
    fn test_command_values() {
        assert_eq!(SaveCommand::Restart.value(), 0x00FF);
        assert_eq!(CalibrationCommand::MagDualPlane.value(), 0x0009);
        // 0x000A is unassigned in the rate table
        assert_eq!(OutputRate::Hz200.value(), 0x000B);
        assert_eq!(BaudRate::Baud115200.value(), 0x0006);
    }

    #[test]
    fn test_output_content_combines() {
        let mut content = OutputContent::ACCELERATION | OutputContent::ANGULAR_VELOCITY;
        content |= OutputContent::ANGLE;

        assert_eq!(content.bits(), 0b1110);
        assert!(content.contains(OutputContent::ACCELERATION));
        assert!(content.contains(OutputContent::ACCELERATION | OutputContent::ANGLE));
        assert!(!content.contains(OutputContent::MAGNETIC_FIELD));
        assert_eq!(OutputContent::empty().bits(), 0);
    }

    #[test]
    fn test_output_content_gsa_is_bit_ten() {
        assert_eq!(OutputContent::GSA.bits(), 1 << 10);
    }
}
