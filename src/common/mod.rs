//! Common types for the docking stack

use nalgebra::Vector6;
use std::fmt;

/// One of the six tracked degrees of freedom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    Yaw,
    Pitch,
    Roll,
}

impl Axis {
    /// Number of tracked axes
    pub const COUNT: usize = 6;

    /// All axes in storage order (translational first, then rotational)
    pub const ALL: [Axis; Axis::COUNT] = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::Yaw,
        Axis::Pitch,
        Axis::Roll,
    ];

    /// Position of this axis in fixed-size axis storage
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name matching the per-axis topic naming
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::Yaw => "yaw",
            Axis::Pitch => "pitch",
            Axis::Roll => "roll",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Latest observed value per axis, at most one entry per axis
///
/// An empty or partially filled set is a valid state; readers that need all
/// six axes gate on `is_complete`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisValues {
    values: [Option<f64>; Axis::COUNT],
}

impl AxisValues {
    /// Create an empty value set
    pub fn new() -> Self {
        AxisValues {
            values: [None; Axis::COUNT],
        }
    }

    /// Record a value for an axis, overwriting any previous one
    pub fn set(&mut self, axis: Axis, value: f64) {
        self.values[axis.index()] = Some(value);
    }

    /// Get the latest value for an axis, if one has been recorded
    pub fn get(&self, axis: Axis) -> Option<f64> {
        self.values[axis.index()]
    }

    /// Number of axes with a recorded value
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// True if no axis has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }

    /// True once every one of the six axes has a recorded value
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| v.is_some())
    }

    /// Iterate over the recorded (axis, value) pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL
            .iter()
            .filter_map(|&axis| self.get(axis).map(|v| (axis, v)))
    }

    /// View the complete set as a vector ordered x, y, z, yaw, pitch, roll
    ///
    /// Returns `None` while any axis is still missing.
    pub fn to_vector(&self) -> Option<Vector6<f64>> {
        if !self.is_complete() {
            return None;
        }
        let mut out = Vector6::zeros();
        for (axis, value) in self.iter() {
            out[axis.index()] = value;
        }
        Some(out)
    }
}
