use bevy::prelude::*;

mod camera;
mod cycle;
mod error;
mod scene;

use camera::orbit_camera_system;
use cycle::{
    DayCycle, SimClock, advance_sim_clock, spin_cube_system, update_flower_tilt_system,
    update_sun_system,
};
use error::SceneError;
use scene::{attach_loaded_models_system, request_models, setup_scene, sky_follow_system};

// Seconds for the sun to complete one orbit.
const DAY_LENGTH: f64 = 15.0;
// Orbit radius of the visible sun sphere.
const SUN_DIST: f32 = 35.0;
// Orbit radius of the point light travelling with the sun.
const SUNLIGHT_DIST: f32 = 25.0;

// App entry point and system registration.
fn main() -> Result<AppExit, SceneError> {
    // A bad cycle must stop us before the frame loop starts.
    let cycle = DayCycle::new(DAY_LENGTH, SUN_DIST, SUNLIGHT_DIST)?;

    let exit = App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(cycle)
        .init_resource::<SimClock>()
        .add_systems(Startup, (setup_scene, request_models))
        .add_systems(
            Update,
            (
                advance_sim_clock,
                update_sun_system,
                update_flower_tilt_system,
                spin_cube_system,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                (orbit_camera_system, sky_follow_system).chain(),
                attach_loaded_models_system,
            ),
        )
        .run();
    Ok(exit)
}
