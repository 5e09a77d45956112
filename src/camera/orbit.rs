use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use crate::camera::components::OrbitCamera;

/// Pixels treated as one scroll line for touchpads reporting pixel deltas.
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

/// Orbit the camera while the left button is held and zoom with the wheel.
pub fn orbit_camera_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let scroll_lines = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y / PIXELS_PER_SCROLL_LINE,
    };
    for (mut transform, mut camera) in &mut camera_query {
        if buttons.pressed(MouseButton::Left) {
            camera.apply_mouse_orbit(mouse_motion.delta);
        }
        if scroll_lines != 0.0 {
            camera.apply_zoom(scroll_lines);
        }
        *transform = camera.transform();
    }
}
