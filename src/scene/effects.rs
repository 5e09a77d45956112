use bevy::prelude::*;

use crate::camera::OrbitCamera;

/// Backdrop sphere, seen from inside, carrying the equirectangular sky texture.
#[derive(Component)]
pub(crate) struct SkyDome;

impl SkyDome {
    /// Dome radius; stays inside the camera far plane.
    const RADIUS: f32 = 90.0;
    /// Longitude segments.
    const SECTORS: u32 = 48;
    /// Latitude segments.
    const STACKS: u32 = 24;

    /// Build the dome sphere.
    pub(super) fn build_mesh() -> Mesh {
        Sphere::new(Self::RADIUS)
            .mesh()
            .uv(Self::SECTORS, Self::STACKS)
    }
}

/// Keep the sky dome centered on the camera so the backdrop never gets closer.
pub fn sky_follow_system(
    camera_query: Query<&Transform, (With<OrbitCamera>, Without<SkyDome>)>,
    mut sky_query: Query<&mut Transform, (With<SkyDome>, Without<OrbitCamera>)>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };
    for mut transform in &mut sky_query {
        transform.translation = camera_transform.translation;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use super::*;
    use crate::scene::setup::{CAMERA_TARGET, SUN_RADIUS};

    /// The dome recenters on the camera every frame.
    #[test]
    fn sky_dome_tracks_camera() {
        let mut app = App::new();
        let camera_at = Vec3::new(3.0, 12.0, -7.0);
        app.world_mut().spawn((
            Transform::from_translation(camera_at),
            OrbitCamera::from_position(camera_at, Vec3::ZERO, 0.01),
        ));
        let sky = app.world_mut().spawn((Transform::default(), SkyDome)).id();
        app.add_systems(Update, sky_follow_system);

        app.update();

        let translation = app.world().get::<Transform>(sky).map(|t| t.translation);
        assert_eq!(translation, Some(camera_at));
    }

    /// Fully zoomed out, the camera still sees every sun position in front of the dome.
    #[test]
    fn sun_stays_inside_dome_at_max_zoom() {
        let mut camera =
            OrbitCamera::from_position(Vec3::new(0.0, 20.0, 10.0), CAMERA_TARGET, 0.01);
        for _ in 0..200 {
            camera.apply_zoom(-1.0);
        }
        for view_step in 0..16 {
            camera.apply_mouse_orbit(Vec2::new(40.0, if view_step < 8 { 20.0 } else { -20.0 }));
            let eye = camera.eye_position();
            for sun_step in 0..64 {
                let angle = sun_step as f32 / 64.0 * TAU;
                let sun = Vec3::new(0.0, angle.sin(), angle.cos()) * crate::SUN_DIST;
                let far_edge = eye.distance(sun) + SUN_RADIUS;
                assert!(far_edge < SkyDome::RADIUS, "eye={eye} sun={sun}");
            }
        }
    }
}
