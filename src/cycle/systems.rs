use bevy::prelude::*;

use crate::cycle::clock::{DayCycle, DriverState, SimClock};
use crate::cycle::orbit::orbit_positions;
use crate::cycle::spin::CubeSpin;
use crate::cycle::tilt::flower_tilt;
use crate::scene::{FlowerHead, FlowerRegistry, SceneHandles, SpinningCube, Sun, SunLight};

/// Advance the simulation clock from this frame's host timestamp.
///
/// Reads real time, which is never paused and never clamps a long frame.
pub fn advance_sim_clock(time: Res<Time<Real>>, mut clock: ResMut<SimClock>) {
    let timestamp_ms = time.elapsed().as_secs_f64() * SimClock::MILLIS_PER_SEC;
    tick_sim_clock(&mut clock, timestamp_ms);
}

/// Feed one timestamp to the clock, skipping malformed ones.
fn tick_sim_clock(clock: &mut SimClock, timestamp_ms: f64) {
    let was_idle = clock.state() == DriverState::Idle;
    if let Err(err) = clock.advance_from_millis(timestamp_ms) {
        warn!("skipping frame {}: {err}", clock.ticks());
        return;
    }
    if was_idle {
        info!("day cycle running from t={:.3}s", clock.elapsed_secs());
    }
}

/// Move the sun and its light along their orbits.
pub fn update_sun_system(
    cycle: Res<DayCycle>,
    clock: Res<SimClock>,
    handles: Res<SceneHandles>,
    mut sun_query: Query<&mut Transform, (With<Sun>, Without<SunLight>)>,
    mut light_query: Query<&mut Transform, (With<SunLight>, Without<Sun>)>,
) {
    let Ok(phase) = cycle.phase_at(clock.elapsed_secs()) else {
        return;
    };
    let positions = orbit_positions(phase, cycle.sun_radius, cycle.light_radius);
    if let Ok(mut sun) = sun_query.get_mut(handles.sun) {
        sun.translation = positions.sun;
    }
    if let Ok(mut light) = light_query.get_mut(handles.sun_light) {
        light.translation = positions.light;
    }
}

/// Tilt every registered flower head plane toward the sun.
pub fn update_flower_tilt_system(
    cycle: Res<DayCycle>,
    clock: Res<SimClock>,
    registry: Res<FlowerRegistry>,
    mut head_query: Query<&mut Transform, With<FlowerHead>>,
) {
    let Ok(phase) = cycle.phase_at(clock.elapsed_secs()) else {
        return;
    };
    let rotation = Quat::from_rotation_x(flower_tilt(phase));
    for &head in registry.heads() {
        if let Ok(mut transform) = head_query.get_mut(head) {
            transform.rotation = rotation;
        }
    }
}

/// Spin the decorative cube by raw elapsed time.
pub fn spin_cube_system(
    clock: Res<SimClock>,
    handles: Res<SceneHandles>,
    mut cube_query: Query<&mut Transform, With<SpinningCube>>,
) {
    if let Ok(mut cube) = cube_query.get_mut(handles.cube) {
        cube.rotation = CubeSpin::at(clock.elapsed_secs()).rotation();
    }
}
