use bevy::image::{
    ImageAddressMode, ImageFilterMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor,
};
use bevy::math::Affine2;
use bevy::prelude::*;

use crate::camera::OrbitCamera;
use crate::cycle::DayCycle;
use crate::scene::effects::SkyDome;
use crate::scene::props::{CubeFaces, FlowerKit, low_poly_sphere, solid_material, spawn_prop};
use crate::scene::{FlowerRegistry, SceneHandles, SpinningCube, Sun, SunLight};

/// Ground plane edge length.
const GROUND_SIZE: f32 = 40.0;
/// Grass texture repeats across the ground, per axis.
const GROUND_TEXTURE_REPEATS: f32 = GROUND_SIZE / 2.0;
/// Grass texture path.
const GRASS_TEXTURE: &str = "textures/grass.png";
/// Equirectangular sky texture path.
const SKY_TEXTURE: &str = "textures/sky.png";
/// Face textures of the spinning cube, in `+X, -X, +Y, -Y, +Z, -Z` order.
const CUBE_FACE_TEXTURES: [&str; CubeFaces::COUNT] = [
    "textures/flower-1.png",
    "textures/flower-2.png",
    "textures/flower-3.png",
    "textures/flower-4.png",
    "textures/flower-5.png",
    "textures/flower-6.png",
];
/// Spinning cube center.
const CUBE_POSITION: Vec3 = Vec3::new(0.0, 5.0, 0.0);
/// Sun sphere radius.
pub(super) const SUN_RADIUS: f32 = 3.0;
/// Sun position before the first frame moves it onto its orbit.
const SUN_START: Vec3 = Vec3::new(0.0, -5.0, 0.0);
/// Sun sphere and light colour (#FDB813).
const SUN_COLOR: Color = Color::srgb(0.992, 0.722, 0.075);
/// Sun point-light luminous power in lumens.
const SUN_LIGHT_INTENSITY: f32 = 25_000_000.0;
/// Sun point-light range; covers the whole garden from the far side of the orbit.
const SUN_LIGHT_RANGE: f32 = 80.0;
/// Fill light direction source.
const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-5.0, 5.0, 0.0);
/// Fill light illuminance.
const FILL_LIGHT_ILLUMINANCE: f32 = 3_000.0;
/// Clear colour shown until the sky texture arrives.
const SKY_COLOR: Color = Color::srgb(0.52, 0.74, 0.88);
/// Ambient colour (#001010).
const AMBIENT_COLOR: Color = Color::srgb(0.0, 0.063, 0.063);
/// Ambient brightness.
const AMBIENT_BRIGHTNESS: f32 = 400.0;
/// Camera start position.
const CAMERA_START: Vec3 = Vec3::new(0.0, 20.0, 10.0);
/// Point the camera orbits around.
pub(super) const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 5.0, 0.0);
/// Vertical field of view in degrees.
const CAMERA_FOV_DEGREES: f32 = 45.0;
/// Near clip distance.
const CAMERA_NEAR: f32 = 0.1;
/// Far clip distance.
const CAMERA_FAR: f32 = 100.0;
/// Mouse-drag orbit sensitivity.
const CAMERA_SENSITIVITY: f32 = 0.005;
/// Ground coordinates `(x, z)` of every flower, in registry order.
const FLOWER_SITES: [(f32, f32); 7] = [
    (12.0, 10.0),
    (8.0, 3.0),
    (10.0, -5.0),
    (8.0, 15.0),
    (2.0, 12.0),
    (-4.0, 8.0),
    (-10.0, 18.0),
];

/// Build ground, sky, lighting, cube, sun, flowers, and camera once at startup.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    cycle: Res<DayCycle>,
) {
    setup_environment(&mut commands);
    spawn_ground(&mut commands, &mut meshes, &mut materials, &asset_server);
    spawn_sky(&mut commands, &mut meshes, &mut materials, &asset_server);
    let cube = spawn_spinning_cube(&mut commands, &mut meshes, &mut materials, &asset_server);
    let (sun, sun_light) = spawn_sun(&mut commands, &mut meshes, &mut materials);
    let flowers = spawn_flowers(&mut commands, &mut meshes, &mut materials);
    spawn_camera(&mut commands);

    info!(
        "garden assembled: {} flowers, day length {}s, sun orbit {}, light orbit {}",
        flowers.heads().len(),
        cycle.day_length,
        cycle.sun_radius,
        cycle.light_radius
    );
    commands.insert_resource(SceneHandles {
        sun,
        sun_light,
        cube,
    });
    commands.insert_resource(flowers);
}

/// Insert clear-colour and ambient-light resources, and the directional fill light.
fn setup_environment(commands: &mut Commands) {
    commands.insert_resource(ClearColor(SKY_COLOR));
    commands.insert_resource(bevy::light::GlobalAmbientLight {
        color: AMBIENT_COLOR,
        brightness: AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });
    commands.spawn((
        bevy::light::DirectionalLight {
            illuminance: FILL_LIGHT_ILLUMINANCE,
            color: Color::WHITE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(FILL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Load a texture that tiles, with blocky magnification.
fn load_tiling_texture(asset_server: &AssetServer, path: &'static str) -> Handle<Image> {
    asset_server.load_with_settings(path, |settings: &mut ImageLoaderSettings| {
        settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::Repeat,
            address_mode_v: ImageAddressMode::Repeat,
            mag_filter: ImageFilterMode::Nearest,
            ..default()
        });
    })
}

/// Spawn the double-sided grass ground plane.
fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    asset_server: &AssetServer,
) {
    let grass = load_tiling_texture(asset_server, GRASS_TEXTURE);
    let material = materials.add(bevy::pbr::StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(grass),
        uv_transform: Affine2::from_scale(Vec2::splat(GROUND_TEXTURE_REPEATS)),
        perceptual_roughness: 0.9,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let mesh = meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE));
    spawn_prop(commands, mesh, material, Transform::IDENTITY);
}

/// Spawn the unlit sky dome that keeps itself centered on the camera.
fn spawn_sky(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    asset_server: &AssetServer,
) {
    let sky_texture: Handle<Image> = asset_server.load(SKY_TEXTURE);
    let material = materials.add(bevy::pbr::StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(sky_texture),
        unlit: true,
        cull_mode: None,
        ..default()
    });
    let mesh = meshes.add(SkyDome::build_mesh());
    commands.spawn((
        bevy::mesh::Mesh3d(mesh),
        bevy::pbr::MeshMaterial3d(material),
        Transform::from_translation(CAMERA_START),
        bevy::light::NotShadowCaster,
        SkyDome,
    ));
}

/// Spawn the cube as a root with six textured, unlit face quads.
fn spawn_spinning_cube(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    asset_server: &AssetServer,
) -> Entity {
    let quad = meshes.add(CubeFaces::build_quad());
    let face_materials: Vec<Handle<StandardMaterial>> = CUBE_FACE_TEXTURES
        .iter()
        .map(|path| {
            materials.add(bevy::pbr::StandardMaterial {
                base_color_texture: Some(asset_server.load(*path)),
                unlit: true,
                ..default()
            })
        })
        .collect();
    commands
        .spawn((
            SpinningCube,
            Transform::from_translation(CUBE_POSITION),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for (index, material) in face_materials.into_iter().enumerate() {
                parent.spawn((
                    bevy::mesh::Mesh3d(quad.clone()),
                    bevy::pbr::MeshMaterial3d(material),
                    CubeFaces::face_transform(index),
                ));
            }
        })
        .id()
}

/// Spawn the sun sphere and its independent point light.
fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> (Entity, Entity) {
    let mesh = meshes.add(low_poly_sphere(SUN_RADIUS));
    let material = solid_material(materials, SUN_COLOR);
    let sun = spawn_prop(commands, mesh, material, Transform::from_translation(SUN_START));
    commands
        .entity(sun)
        .insert((Sun, bevy::light::NotShadowCaster));

    let sun_light = commands
        .spawn((
            bevy::light::PointLight {
                color: SUN_COLOR,
                intensity: SUN_LIGHT_INTENSITY,
                range: SUN_LIGHT_RANGE,
                shadows_enabled: true,
                ..default()
            },
            Transform::default(),
            SunLight,
        ))
        .id();
    (sun, sun_light)
}

/// Spawn every flower and register its head plane.
fn spawn_flowers(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> FlowerRegistry {
    let kit = FlowerKit::new(meshes, materials);
    let mut registry = FlowerRegistry::default();
    for (x, z) in FLOWER_SITES {
        registry.register(kit.spawn(commands, x, z));
    }
    registry
}

/// Spawn the perspective camera with orbit controls.
fn spawn_camera(commands: &mut Commands) {
    let orbit = OrbitCamera::from_position(CAMERA_START, CAMERA_TARGET, CAMERA_SENSITIVITY);
    commands.spawn((
        bevy::camera::Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(),
        orbit,
    ));
}
