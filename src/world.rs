//! Physics world: boundary walls and the dynamic bodies inside them.
//!
//! ## Lifecycle
//!
//! | Trigger                          | Walls       | Bodies                  |
//! |----------------------------------|-------------|-------------------------|
//! | [`BreakpointChanged`] (incl. first) | respawned | respawned with new profile |
//! | [`RebuildWorld`] (`R` key)       | respawned   | respawned               |
//! | [`Layout`] change only           | respawned   | kept, clamped inside     |
//!
//! Only physics components are attached here.  Meshes and materials are added
//! by [`crate::scene`] for entities that gain [`Body`] or [`Wall`], which keeps
//! this module usable in headless apps.

use crate::breakpoint::{BreakpointChanged, BreakpointProfile, BreakpointState};
use crate::config::SceneConfig;
use crate::layout::Layout;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// A dynamic cube body.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Edge length (m).
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Floor,
    Ceiling,
    Left,
    Right,
    Back,
    Front,
}

impl WallSide {
    pub const ALL: [WallSide; 6] = [
        WallSide::Floor,
        WallSide::Ceiling,
        WallSide::Left,
        WallSide::Right,
        WallSide::Back,
        WallSide::Front,
    ];
}

/// A fixed boundary slab.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub side: WallSide,
    pub half_extents: Vec3,
}

/// Request a full rebuild of walls and bodies.
#[derive(Message, Debug, Default, Clone, Copy)]
pub struct RebuildWorld;

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct WorldStats {
    pub body_count: usize,
    pub rebuilds: u32,
}

/// Centre and half-extents of the slab on `side` enclosing `layout`.
///
/// Floor and ceiling are widened by the thickness on X and Z so the corners
/// are closed.  Side walls are deepened on Z for the same reason.
pub fn wall_geometry(side: WallSide, layout: &Layout, thickness: f32) -> (Vec3, Vec3) {
    let half = layout.half_extents();
    let t = thickness / 2.0;
    match side {
        WallSide::Floor => (
            Vec3::new(0.0, -half.y - t, 0.0),
            Vec3::new(half.x + thickness, t, half.z + thickness),
        ),
        WallSide::Ceiling => (
            Vec3::new(0.0, half.y + t, 0.0),
            Vec3::new(half.x + thickness, t, half.z + thickness),
        ),
        WallSide::Left => (
            Vec3::new(-half.x - t, 0.0, 0.0),
            Vec3::new(t, half.y, half.z + thickness),
        ),
        WallSide::Right => (
            Vec3::new(half.x + t, 0.0, 0.0),
            Vec3::new(t, half.y, half.z + thickness),
        ),
        WallSide::Back => (
            Vec3::new(0.0, 0.0, -half.z - t),
            Vec3::new(half.x, half.y, t),
        ),
        WallSide::Front => (
            Vec3::new(0.0, 0.0, half.z + t),
            Vec3::new(half.x, half.y, t),
        ),
    }
}

/// Spawn all six boundary walls for `layout`.
pub fn spawn_walls(commands: &mut Commands, layout: &Layout, config: &SceneConfig) {
    for side in WallSide::ALL {
        let (center, half_extents) = wall_geometry(side, layout, config.wall_thickness);
        commands.spawn((
            Wall { side, half_extents },
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
            Restitution::coefficient(config.body_restitution),
            Friction::coefficient(config.body_friction),
            Transform::from_translation(center),
            Visibility::default(),
        ));
    }
}

/// Pick `count` non-overlapping centres in the upper half of the box.
///
/// Each candidate is retried a bounded number of times; when the box is too
/// crowded the last candidate is accepted and Rapier separates the overlap.
pub fn spawn_positions(layout: &Layout, profile: BreakpointProfile, seed: u64) -> Vec<(Vec3, Quat)> {
    const ATTEMPTS: usize = 32;

    let mut rng = StdRng::seed_from_u64(seed);
    let half = layout.half_extents();
    let margin = profile.body_size * 0.5 * 3.0_f32.sqrt();
    let limit = (half - Vec3::splat(margin)).max(Vec3::ZERO);
    let min_gap = margin * 2.0;

    let mut placed: Vec<(Vec3, Quat)> = Vec::with_capacity(profile.body_count);
    for _ in 0..profile.body_count {
        let mut candidate = Vec3::ZERO;
        for _ in 0..ATTEMPTS {
            candidate = Vec3::new(
                sample_axis(&mut rng, -limit.x, limit.x),
                sample_axis(&mut rng, 0.0, limit.y),
                sample_axis(&mut rng, -limit.z, limit.z),
            );
            if placed.iter().all(|(p, _)| p.distance(candidate) >= min_gap) {
                break;
            }
        }
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            rng.gen_range(0.0..TAU),
            rng.gen_range(0.0..TAU),
            rng.gen_range(0.0..TAU),
        );
        placed.push((candidate, rotation));
    }
    placed
}

fn sample_axis(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Spawn the dynamic bodies for `profile`; returns how many were spawned.
pub fn spawn_bodies(
    commands: &mut Commands,
    layout: &Layout,
    profile: BreakpointProfile,
    config: &SceneConfig,
) -> usize {
    let half = profile.body_size / 2.0;
    let positions = spawn_positions(layout, profile, config.spawn_seed);
    for &(translation, rotation) in &positions {
        commands.spawn((
            Body {
                size: profile.body_size,
            },
            RigidBody::Dynamic,
            Collider::cuboid(half, half, half),
            Restitution::coefficient(config.body_restitution),
            Friction::coefficient(config.body_friction),
            Velocity::zero(),
            Sleeping::default(),
            Ccd::enabled(),
            Transform::from_translation(translation).with_rotation(rotation),
            Visibility::default(),
        ));
    }
    positions.len()
}

/// `R` requests a full rebuild.
pub fn reset_key_system(keys: Res<ButtonInput<KeyCode>>, mut rebuild: MessageWriter<RebuildWorld>) {
    if keys.just_pressed(KeyCode::KeyR) {
        rebuild.write(RebuildWorld);
    }
}

/// Keep walls and bodies consistent with the current breakpoint and layout.
#[allow(clippy::too_many_arguments)]
pub fn world_layout_system(
    mut commands: Commands,
    mut breakpoint_changes: MessageReader<BreakpointChanged>,
    mut rebuilds: MessageReader<RebuildWorld>,
    state: Res<BreakpointState>,
    layout: Res<Layout>,
    config: Res<SceneConfig>,
    walls: Query<Entity, With<Wall>>,
    mut bodies: Query<(Entity, &Body, &mut Transform)>,
    mut stats: ResMut<WorldStats>,
) {
    let changed = breakpoint_changes.read().count() > 0;
    let requested = rebuilds.read().count() > 0;

    let Some(breakpoint) = state.0 else {
        return;
    };

    if changed || requested {
        for entity in walls.iter() {
            commands.entity(entity).despawn();
        }
        for (entity, _, _) in bodies.iter() {
            commands.entity(entity).despawn();
        }
        spawn_walls(&mut commands, &layout, &config);
        stats.body_count = spawn_bodies(&mut commands, &layout, config.profile(breakpoint), &config);
        stats.rebuilds += 1;
        info!(
            "[world] Rebuilt for {}: {} bodies in {:.2}x{:.2}x{:.2} m box",
            breakpoint.label(),
            stats.body_count,
            layout.width,
            layout.height,
            layout.depth
        );
        return;
    }

    if layout.is_changed() {
        for entity in walls.iter() {
            commands.entity(entity).despawn();
        }
        spawn_walls(&mut commands, &layout, &config);
        for (_, body, mut transform) in bodies.iter_mut() {
            let clamped = layout.clamp_inside(transform.translation, body.size / 2.0);
            if clamped != transform.translation {
                transform.translation = clamped;
            }
        }
        debug!("[world] Refit walls to {:.2}x{:.2} m", layout.width, layout.height);
    }
}
