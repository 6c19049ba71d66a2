//! Camera, lights, and the visual layer for physics entities.
//!
//! Rapier owns every body's `Transform`; bevy_rapier writes the simulated
//! pose back each step, so the meshes attached here follow their bodies
//! without any per-frame copy in this crate.

use crate::camera_fit::CameraFit;
use crate::config::SceneConfig;
use crate::world::{Body, Wall, WallSide};
use bevy::prelude::*;

/// Spawn the perspective camera that [`crate::camera_fit`] keeps framed.
pub fn setup_camera(mut commands: Commands, config: Res<SceneConfig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: config.camera_fov_deg.to_radians(),
            near: config.camera_near,
            far: config.camera_far,
            ..default()
        }),
        // Placeholder until the first layout pass moves it.
        Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        CameraFit,
    ));
    info!("[SETUP] Camera spawned");
}

/// Key light from the upper right front, plus a dim fill from the left.
pub fn setup_lights(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 2_500.0,
            ..default()
        },
        Transform::from_xyz(-6.0, 2.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    info!("[SETUP] Lights spawned");
}

/// Attach a cube mesh to every newly spawned [`Body`].
pub fn attach_body_mesh_system(
    mut commands: Commands,
    query: Query<(Entity, &Body), Added<Body>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, body) in query.iter() {
        let mesh = meshes.add(Cuboid::new(body.size, body.size, body.size));
        let material = materials.add(StandardMaterial {
            base_color: body_color(entity.index()),
            perceptual_roughness: 0.6,
            ..default()
        });
        commands
            .entity(entity)
            .insert((Mesh3d(mesh), MeshMaterial3d(material)));
    }
}

/// Attach a translucent slab to every newly spawned [`Wall`].
///
/// The front wall keeps its collider but gets no mesh so the interior stays
/// visible.
pub fn attach_wall_mesh_system(
    mut commands: Commands,
    query: Query<(Entity, &Wall), Added<Wall>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, wall) in query.iter() {
        if wall.side == WallSide::Front {
            continue;
        }
        let size = wall.half_extents * 2.0;
        let mesh = meshes.add(Cuboid::new(size.x, size.y, size.z));
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(0.55, 0.6, 0.7, 0.25),
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        commands
            .entity(entity)
            .insert((Mesh3d(mesh), MeshMaterial3d(material)));
    }
}

/// Green-leaning hue per entity so neighbouring cubes stay distinguishable.
fn body_color(seed: u32) -> Color {
    let h = seed.wrapping_mul(2_654_435_761);
    let t = (h >> 16) as f32 / 65_535.0;
    Color::hsl(90.0 + t * 80.0, 0.75, 0.5)
}
