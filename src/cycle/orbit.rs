use bevy::prelude::*;

use crate::cycle::clock::DayPhase;

/// Sun and sun-light positions for one phase of the day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPositions {
    /// World position of the visible sun sphere.
    pub sun: Vec3,
    /// World position of the point light travelling with the sun.
    pub light: Vec3,
}

/// Place the sun and its light on circles in the `YZ` plane.
///
/// Height follows `sin(angle)` and depth follows `cos(angle)`; both share the
/// same angle but use independent radii.
pub fn orbit_positions(phase: DayPhase, sun_radius: f32, light_radius: f32) -> OrbitPositions {
    let (sin, cos) = phase.angle().sin_cos();
    OrbitPositions {
        sun: orbit_point(sin, cos, sun_radius),
        light: orbit_point(sin, cos, light_radius),
    }
}

fn orbit_point(sin: f32, cos: f32, radius: f32) -> Vec3 {
    Vec3::new(0.0, sin * radius, cos * radius)
}
