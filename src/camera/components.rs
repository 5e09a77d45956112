use bevy::prelude::*;

/// Camera controller state used by the orbit-and-zoom system.
#[derive(Component, Clone, Debug)]
pub struct OrbitCamera {
    /// Point the camera looks at and orbits around.
    pub target: Vec3,
    /// Distance from the target.
    pub distance: f32,
    /// Yaw angle in radians, measured from `+Z` toward `+X`.
    pub yaw: f32,
    /// Pitch angle in radians above the target's horizontal plane.
    pub pitch: f32,
    /// Drag sensitivity factor.
    pub sensitivity: f32,
}

impl OrbitCamera {
    /// Minimum pitch angle clamp.
    const PITCH_MIN: f32 = -1.55;
    /// Maximum pitch angle clamp.
    const PITCH_MAX: f32 = 1.55;
    /// Closest zoom distance.
    const DISTANCE_MIN: f32 = 2.0;
    /// Farthest zoom distance; keeps the whole sun orbit in front of the sky dome.
    const DISTANCE_MAX: f32 = 45.0;
    /// Fraction of the current distance covered by one scroll line.
    const ZOOM_STEP: f32 = 0.1;

    /// Build orbit state that reproduces a camera at `position` looking at `target`.
    pub fn from_position(position: Vec3, target: Vec3, sensitivity: f32) -> Self {
        let offset = position - target;
        let distance = offset
            .length()
            .clamp(Self::DISTANCE_MIN, Self::DISTANCE_MAX);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(Self::PITCH_MIN, Self::PITCH_MAX);
        Self {
            target,
            distance,
            yaw,
            pitch,
            sensitivity,
        }
    }

    /// Apply a drag delta to yaw/pitch with sensitivity and clamp pitch.
    pub fn apply_mouse_orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * self.sensitivity;
        self.pitch += delta.y * self.sensitivity;
        self.pitch = self.pitch.clamp(Self::PITCH_MIN, Self::PITCH_MAX);
    }

    /// Apply scroll lines; positive scroll moves closer.
    pub fn apply_zoom(&mut self, scroll: f32) {
        let factor = (1.0 - scroll * Self::ZOOM_STEP).max(0.0);
        self.distance = (self.distance * factor).clamp(Self::DISTANCE_MIN, Self::DISTANCE_MAX);
    }

    /// World-space camera position for the current orbit state.
    pub fn eye_position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch) * self.distance
    }

    /// Camera transform looking at the target.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye_position()).looking_at(self.target, Vec3::Y)
    }
}
