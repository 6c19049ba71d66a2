//! World-space layout of the wall box, derived from the viewport.
//!
//! The viewport height always spans [`SceneConfig::wall_length`] metres, so
//! one metre is `viewport_height / wall_length` pixels.  The box width follows
//! the viewport aspect ratio: wide screens get a wide box.

use crate::config::SceneConfig;
use crate::viewport::Viewport;
use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Inner width of the box (m).
    pub width: f32,
    /// Inner height of the box (m).
    pub height: f32,
    /// Inner depth of the box (m).
    pub depth: f32,
    /// Screen pixels per world metre along the vertical axis.
    pub pixels_per_meter: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::compute(&Viewport::default(), &SceneConfig::default())
    }
}

impl Layout {
    pub fn compute(viewport: &Viewport, config: &SceneConfig) -> Self {
        let height = config.wall_length;
        Self {
            width: height * viewport.aspect(),
            height,
            depth: config.box_depth,
            pixels_per_meter: viewport.height / config.wall_length,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Inner half-extents of the box.
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth) / 2.0
    }

    /// Clamp `point` so a body of half-size `margin` centred there stays inside.
    pub fn clamp_inside(&self, point: Vec3, margin: f32) -> Vec3 {
        let limit = (self.half_extents() - Vec3::splat(margin)).max(Vec3::ZERO);
        point.clamp(-limit, limit)
    }
}

/// Recompute [`Layout`] when the viewport or configuration changes.
pub fn update_layout_system(
    viewport: Res<Viewport>,
    config: Res<SceneConfig>,
    mut layout: ResMut<Layout>,
) {
    if !viewport.is_changed() && !config.is_changed() {
        return;
    }
    if layout.set_if_neq(Layout::compute(&viewport, &config)) {
        debug!(
            "[layout] Box {:.2}x{:.2}x{:.2} m, {:.1} px/m",
            layout.width, layout.height, layout.depth, layout.pixels_per_meter
        );
    }
}
