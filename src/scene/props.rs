use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;

use crate::scene::{Flower, FlowerHead};

/// Stem cylinder radius.
const STEM_RADIUS: f32 = 0.3;
/// Stem cylinder height.
const STEM_HEIGHT: f32 = 4.0;
/// Radial segments of the stem and head-plane meshes.
const FLOWER_SEGMENTS: u32 = 10;
/// Stem and leaf center height.
const STEM_Y: f32 = 2.0;
/// Leaf box size.
const LEAF_SIZE: Vec3 = Vec3::new(0.1, 2.0, 2.0);
/// Leaf rotation about `X`, in radians (not degrees).
const LEAF_TILT: f32 = 45.0;
/// Flower head sphere radius.
const HEAD_RADIUS: f32 = 1.0;
/// Flower head center height.
const HEAD_Y: f32 = 4.5;
/// Head-plane cone radius.
const PETAL_RADIUS: f32 = 3.0;
/// Head-plane cone height.
const PETAL_HEIGHT: f32 = 1.5;
/// Head-plane center height.
const PETAL_Y: f32 = 4.2;
/// Sphere sectors/stacks used for low-poly spheres.
const LOW_POLY_SEGMENTS: u32 = 8;

/// Stem colour (#013220).
const STEM_COLOR: Color = Color::srgb(0.004, 0.196, 0.125);
/// Leaf colour (#AFBD22).
const LEAF_COLOR: Color = Color::srgb(0.686, 0.741, 0.133);
/// Head colour (#5C4033).
const HEAD_COLOR: Color = Color::srgb(0.361, 0.251, 0.2);
/// Head-plane colour (#FFFFCD).
const PETAL_COLOR: Color = Color::srgb(1.0, 1.0, 0.804);

/// Edge length of the spinning cube.
const CUBE_SIZE: f32 = 2.0;

/// Spawn one mesh instance with a transform and return its entity.
pub(super) fn spawn_prop(
    commands: &mut Commands,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    transform: Transform,
) -> Entity {
    commands
        .spawn((
            bevy::mesh::Mesh3d(mesh),
            bevy::pbr::MeshMaterial3d(material),
            transform,
        ))
        .id()
}

/// Build a lit, plain-coloured material.
pub(super) fn solid_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
    color: Color,
) -> Handle<StandardMaterial> {
    materials.add(bevy::pbr::StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.8,
        ..default()
    })
}

/// Build a low-poly UV sphere.
pub(super) fn low_poly_sphere(radius: f32) -> Mesh {
    Sphere::new(radius)
        .mesh()
        .uv(LOW_POLY_SEGMENTS, LOW_POLY_SEGMENTS)
}

/// Shared meshes and materials for every flower.
pub(super) struct FlowerKit {
    stem: (Handle<Mesh>, Handle<StandardMaterial>),
    leaf: (Handle<Mesh>, Handle<StandardMaterial>),
    head: (Handle<Mesh>, Handle<StandardMaterial>),
    petals: (Handle<Mesh>, Handle<StandardMaterial>),
}

impl FlowerKit {
    /// Build the four part meshes and their colours once.
    pub(super) fn new(
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
    ) -> Self {
        Self {
            stem: (
                meshes.add(
                    Cylinder::new(STEM_RADIUS, STEM_HEIGHT)
                        .mesh()
                        .resolution(FLOWER_SEGMENTS),
                ),
                solid_material(materials, STEM_COLOR),
            ),
            leaf: (
                meshes.add(Cuboid::from_size(LEAF_SIZE)),
                solid_material(materials, LEAF_COLOR),
            ),
            head: (
                meshes.add(low_poly_sphere(HEAD_RADIUS)),
                solid_material(materials, HEAD_COLOR),
            ),
            petals: (
                meshes.add(
                    Cone {
                        radius: PETAL_RADIUS,
                        height: PETAL_HEIGHT,
                    }
                    .mesh()
                    .resolution(FLOWER_SEGMENTS),
                ),
                solid_material(materials, PETAL_COLOR),
            ),
        }
    }

    /// Local transforms of stem, leaf, head, and head plane relative to the flower root.
    fn part_transforms() -> [Transform; 4] {
        [
            Transform::from_xyz(0.0, STEM_Y, 0.0),
            Transform::from_xyz(0.0, STEM_Y, 0.0).with_rotation(Quat::from_rotation_x(LEAF_TILT)),
            Transform::from_xyz(0.0, HEAD_Y, 0.0),
            Transform::from_xyz(0.0, PETAL_Y, 0.0),
        ]
    }

    /// Spawn a flower rooted at ground coordinate `(x, z)` and return its head-plane entity.
    pub(super) fn spawn(&self, commands: &mut Commands, x: f32, z: f32) -> Entity {
        let [stem_at, leaf_at, head_at, petals_at] = Self::part_transforms();
        let mut head_plane = Entity::PLACEHOLDER;
        commands
            .spawn((Flower, Transform::from_xyz(x, 0.0, z), Visibility::default()))
            .with_children(|parent| {
                for ((mesh, material), transform) in
                    [(&self.stem, stem_at), (&self.leaf, leaf_at), (&self.head, head_at)]
                {
                    parent.spawn((
                        bevy::mesh::Mesh3d(mesh.clone()),
                        bevy::pbr::MeshMaterial3d(material.clone()),
                        transform,
                    ));
                }
                head_plane = parent
                    .spawn((
                        bevy::mesh::Mesh3d(self.petals.0.clone()),
                        bevy::pbr::MeshMaterial3d(self.petals.1.clone()),
                        petals_at,
                        FlowerHead,
                    ))
                    .id();
            });
        head_plane
    }
}

/// Faces of the spinning cube, one textured quad each.
pub(super) struct CubeFaces;

impl CubeFaces {
    /// Number of faces, ordered `+X, -X, +Y, -Y, +Z, -Z`.
    pub(super) const COUNT: usize = 6;

    /// Square quad covering one cube face, facing `+Z` before placement.
    pub(super) fn build_quad() -> Mesh {
        Rectangle::new(CUBE_SIZE, CUBE_SIZE).into()
    }

    /// Transform that moves the `+Z` quad onto face `index`, relative to the cube center.
    pub(super) fn face_transform(index: usize) -> Transform {
        let half = CUBE_SIZE * 0.5;
        let (normal, rotation) = match index {
            0 => (Vec3::X, Quat::from_rotation_y(FRAC_PI_2)),
            1 => (Vec3::NEG_X, Quat::from_rotation_y(-FRAC_PI_2)),
            2 => (Vec3::Y, Quat::from_rotation_x(-FRAC_PI_2)),
            3 => (Vec3::NEG_Y, Quat::from_rotation_x(FRAC_PI_2)),
            4 => (Vec3::Z, Quat::IDENTITY),
            _ => (Vec3::NEG_Z, Quat::from_rotation_y(PI)),
        };
        Transform::from_translation(normal * half).with_rotation(rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every face quad ends up on the cube surface facing outward.
    #[test]
    fn cube_faces_point_outward() {
        for index in 0..CubeFaces::COUNT {
            let transform = CubeFaces::face_transform(index);
            let facing = transform.rotation * Vec3::Z;
            let outward = transform.translation.normalize();
            assert!(facing.abs_diff_eq(outward, 1e-5), "face {index}: {facing} vs {outward}");
            assert!((transform.translation.length() - CUBE_SIZE * 0.5).abs() < 1e-6);
        }
    }

    /// Faces cover six distinct sides.
    #[test]
    fn cube_faces_are_distinct() {
        let centers: Vec<Vec3> = (0..CubeFaces::COUNT)
            .map(|index| CubeFaces::face_transform(index).translation)
            .collect();
        for (i, a) in centers.iter().enumerate() {
            for b in &centers[i + 1..] {
                assert!(!a.abs_diff_eq(*b, 1e-5));
            }
        }
    }

    /// Flower parts sit at the configured heights and only the leaf is pre-rotated.
    #[test]
    fn flower_parts_stack_on_the_stem() {
        let [stem, leaf, head, petals] = FlowerKit::part_transforms();
        assert_eq!(stem.translation.y, STEM_Y);
        assert_eq!(leaf.translation.y, STEM_Y);
        assert_eq!(head.translation.y, HEAD_Y);
        assert_eq!(petals.translation.y, PETAL_Y);
        assert_ne!(leaf.rotation, Quat::IDENTITY);
        assert_eq!(petals.rotation, Quat::IDENTITY);
    }

    /// Spawning a flower creates a root with four children and returns the head plane.
    #[test]
    fn flower_spawn_returns_head_plane() {
        let mut world = World::new();
        let kit = FlowerKit {
            stem: (Handle::default(), Handle::default()),
            leaf: (Handle::default(), Handle::default()),
            head: (Handle::default(), Handle::default()),
            petals: (Handle::default(), Handle::default()),
        };
        let head = {
            let mut commands = world.commands();
            kit.spawn(&mut commands, 8.0, 3.0)
        };
        world.flush();

        assert!(world.get::<FlowerHead>(head).is_some());
        let parent = world.get::<ChildOf>(head).map(|child_of| child_of.parent());
        let parent = parent.expect("head plane has a flower root");
        assert!(world.get::<Flower>(parent).is_some());
        assert_eq!(world.get::<Children>(parent).map(|c| c.len()), Some(4));
        assert_eq!(
            world.get::<Transform>(parent).map(|t| t.translation),
            Some(Vec3::new(8.0, 0.0, 3.0))
        );
    }
}
