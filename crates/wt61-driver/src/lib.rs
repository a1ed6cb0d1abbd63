//! # wt61-driver
//!
//! Host-side driver for the WT61PC serial 6-axis IMU.
//!
//! The driver turns the sensor's continuous byte stream into validated
//! [`SensorState`] updates, recovers from link desynchronization or silence,
//! and issues configuration commands through the sensor's protected
//! register-write sequence. It performs no I/O itself: the host supplies a
//! [`Transport`] for frame transmission and receive re-arming, delivers every
//! received byte through [`Wt61::on_byte`], and calls [`Wt61::poll`] from its
//! periodic loop with a monotonic millisecond tick.
//!
//! ## Usage
//!
//! ```no_run
//! use wt61_driver::{OutputRate, Transport, Wt61};
//!
//! struct Uart;
//!
//! impl Transport for Uart {
//!     fn send(&mut self, frame: &[u8]) { /* queue frame for transmission */ }
//!     fn arm_receive(&mut self) { /* re-arm single-byte reception */ }
//! }
//!
//! let mut imu = Wt61::new(Uart);
//! imu.set_output_rate(OutputRate::Hz100)?;
//!
//! // Host loop: feed each received byte, poll with the current tick.
//! imu.on_byte(0x55, 0);
//! imu.poll(10);
//! let roll = imu.state().angle.x;
//! # Ok::<(), wt61_driver::CommandError>(())
//! ```

mod command;
mod driver;
mod receiver;
mod state;
mod transport;
mod watchdog;

pub use command::{CommandError, CommandTransmitter, TxStage};
pub use driver::Wt61;
pub use receiver::FrameReceiver;
pub use state::SensorState;
pub use transport::Transport;
pub use watchdog::{LinkWatchdog, LINK_TIMEOUT_MS, RESTART_HOLDOFF_MS};

pub use wt61_protocol::{
    Axes, BaudRate, CalibrationCommand, OutputContent, OutputRate, Register, SaveCommand,
};
