//! Common types used in the protocol.

use serde::{Deserialize, Serialize};

/// A three-axis vector quantity.
///
/// The unit depends on the frame family the value was decoded from:
/// g for acceleration, deg/s for angular velocity, deg for angle position,
/// and raw counts for magnetic field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Axes {
    /// X axis component.
    pub x: f32,
    /// Y axis component.
    pub y: f32,
    /// Z axis component.
    pub z: f32,
}

impl Axes {
    /// Create a new vector from its components.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Axes { x, y, z }
    }
}
