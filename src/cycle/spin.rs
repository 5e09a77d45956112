use std::f64::consts::TAU;

use bevy::prelude::*;

/// Two-axis rotation of the decorative cube, independent of the day cycle.
///
/// Angles are kept in `f64` so they keep growing long after `f32` would stall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeSpin {
    /// Rotation about `X` in radians.
    pub x: f64,
    /// Rotation about `Y` in radians.
    pub y: f64,
}

impl CubeSpin {
    /// Spin for raw elapsed seconds; both axes equal the elapsed time, unwrapped.
    pub fn at(elapsed_secs: f64) -> Self {
        Self {
            x: elapsed_secs,
            y: elapsed_secs,
        }
    }

    /// Euler `XYZ` rotation for the cube transform.
    pub fn rotation(self) -> Quat {
        // Reduce before narrowing so the f32 angle stays precise.
        let x = self.x.rem_euclid(TAU) as f32;
        let y = self.y.rem_euclid(TAU) as f32;
        Quat::from_euler(EulerRot::XYZ, x, y, 0.0)
    }
}
