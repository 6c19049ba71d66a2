//! Scroll acceleration → world gravity.
//!
//! ```text
//! gravity.y = accel_px / pixels_per_meter − base_gravity
//! ```
//!
//! Scrolling down (content moving up) with increasing speed lightens or
//! inverts gravity; braking a downward scroll makes the bodies heavier.
//!
//! Rapier does not re-evaluate sleeping bodies when gravity changes, so every
//! change is followed by waking all bodies.

use crate::config::SceneConfig;
use crate::layout::Layout;
use crate::scroll::ScrollKinematics;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Gravity vector the physics world should currently use (m/s²).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneGravity(pub Vec3);

impl Default for SceneGravity {
    fn default() -> Self {
        SceneGravity(Vec3::new(0.0, -crate::constants::BASE_GRAVITY, 0.0))
    }
}

/// Vertical gravity for a scroll acceleration of `accel_px` px/s².
///
/// The scroll term is limited to `±clamp` m/s² unless `clamp <= 0`.  A
/// non-positive `pixels_per_meter` contributes nothing.
pub fn gravity_from_scroll(accel_px: f32, pixels_per_meter: f32, base: f32, clamp: f32) -> f32 {
    if pixels_per_meter <= 0.0 || !accel_px.is_finite() {
        return -base;
    }
    let mut scroll = accel_px / pixels_per_meter;
    if clamp > 0.0 {
        scroll = scroll.clamp(-clamp, clamp);
    }
    scroll - base
}

/// Derive [`SceneGravity`] from this frame's scroll acceleration.
pub fn scroll_gravity_system(
    kinematics: Res<ScrollKinematics>,
    layout: Res<Layout>,
    config: Res<SceneConfig>,
    mut gravity: ResMut<SceneGravity>,
) {
    let y = gravity_from_scroll(
        kinematics.acceleration,
        layout.pixels_per_meter,
        config.base_gravity,
        config.gravity_scroll_clamp,
    );
    gravity.set_if_neq(SceneGravity(Vec3::new(0.0, y, 0.0)));
}

/// Push [`SceneGravity`] into Rapier and wake every body when it changed.
pub fn apply_gravity_system(
    gravity: Res<SceneGravity>,
    mut rapier: Query<&mut RapierConfiguration>,
    mut sleepers: Query<&mut Sleeping>,
) {
    // A context created after the last gravity change still needs the value.
    for mut cfg in rapier.iter_mut() {
        if gravity.is_changed() || cfg.is_added() {
            cfg.gravity = gravity.0;
        }
    }
    if !gravity.is_changed() {
        return;
    }
    // Written unconditionally: the local flag can lag Rapier's island state,
    // and the change tick is what makes bevy_rapier call `wake_up`.
    for mut sleeping in sleepers.iter_mut() {
        sleeping.sleeping = false;
    }
}
