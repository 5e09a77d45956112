use bevy::prelude::*;

mod effects;
mod models;
mod props;
mod setup;

pub use effects::sky_follow_system;
pub use models::{attach_loaded_models_system, request_models};
pub use setup::setup_scene;

/// Marker for the visible sun sphere.
#[derive(Component)]
pub struct Sun;

/// Marker for the point light orbiting with the sun.
#[derive(Component)]
pub struct SunLight;

/// Marker for the textured cube that spins on two axes.
#[derive(Component)]
pub struct SpinningCube;

/// Marker for a flower root; its children are the stem, leaf, head, and head plane.
#[derive(Component)]
pub struct Flower;

/// Marker for the cone-shaped head plane that tilts with the sun.
#[derive(Component)]
pub struct FlowerHead;

/// Marker for an external model attached after its assets finished loading.
#[derive(Component)]
pub struct DecorativeModel;

#[derive(Resource, Clone, Copy, Debug)]
/// Entity handles of the singly-animated scene objects.
pub struct SceneHandles {
    /// Visible sun sphere.
    pub sun: Entity,
    /// Point light following the sun.
    pub sun_light: Entity,
    /// Spinning decorative cube.
    pub cube: Entity,
}

#[derive(Resource, Default, Debug)]
/// Flower head planes in insertion order.
pub struct FlowerRegistry {
    heads: Vec<Entity>,
}

impl FlowerRegistry {
    /// Record one flower head plane.
    pub fn register(&mut self, head: Entity) {
        self.heads.push(head);
    }

    /// Registered head planes in insertion order.
    pub fn heads(&self) -> &[Entity] {
        &self.heads
    }
}
