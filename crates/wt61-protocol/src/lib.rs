//! WT61PC serial IMU wire protocol
//!
//! This crate provides types and utilities for the binary serial protocol
//! spoken by the WT61PC family of 6-axis inertial sensors. The sensor streams
//! fixed-size telemetry frames and accepts register writes through a
//! protected two-frame command sequence.
//!
//! # Protocol Overview
//!
//! Telemetry frames (sensor → host) are 11 bytes:
//!
//! ```text
//! +------+------+----+----+----+----+----+----+----+----+----------+
//! | 0x55 | code | d0 | d1 | d2 | d3 | d4 | d5 | d6 | d7 | checksum |
//! +------+------+----+----+----+----+----+----+----+----+----------+
//! ```
//!
//! The payload carries four little-endian `i16` values; the checksum is the
//! truncating 8-bit sum of the first ten bytes. The frame family is selected
//! by the code byte (`0x51` acceleration, `0x52` angular velocity, `0x53`
//! angle, `0x54` magnetic field, `0x5F` register echo).
//!
//! Command frames (host → sensor) are 5 bytes: `FF AA <register> <lo> <hi>`.
//! A register write is only accepted after the fixed unlock frame
//! `FF AA 69 88 B5`, with settling time between the two.
//!
//! # Example
//!
//! ```rust
//! use wt61_protocol::{FrameAssembler, Telemetry};
//!
//! let mut assembler = FrameAssembler::new();
//! # let received: Vec<u8> = Vec::new();
//! for byte in received {
//!     if let Some(frame) = assembler.push(byte) {
//!         match Telemetry::decode(&frame) {
//!             Ok(telemetry) => { /* apply to sensor state */ }
//!             Err(_) => { /* corrupt frame, drop it */ }
//!         }
//!     }
//! }
//! ```

mod constants;
mod error;
mod frame;
mod registers;
mod telemetry;
mod types;

pub use constants::*;
pub use error::*;
pub use frame::*;
pub use registers::*;
pub use telemetry::*;
pub use types::*;
