//! Perspective camera framing for the wall box.
//!
//! A box of height `h` seen through a vertical field of view `fov` exactly
//! fills the view at `distance = (h / 2) / tan(fov / 2)`.  When the viewport
//! is narrower than the box, the width becomes the binding extent and is
//! converted back into an equivalent height through the aspect ratio.

use crate::config::SceneConfig;
use crate::error::{validate_fov, validate_positive, SceneResult};
use crate::layout::Layout;
use crate::viewport::Viewport;
use bevy::prelude::*;

/// Marker for the camera that is kept framed on the wall box.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct CameraFit;

/// Distance at which a target of height `height` fills a vertical FOV of
/// `fov_deg` degrees.
#[inline]
pub fn fit_distance(height: f32, fov_deg: f32) -> f32 {
    (height / 2.0) / (fov_deg.to_radians() / 2.0).tan()
}

/// Checked variant of [`fit_distance`].
pub fn try_fit_distance(height: f32, fov_deg: f32) -> SceneResult<f32> {
    validate_fov(fov_deg)?;
    validate_positive("height", height)?;
    Ok(fit_distance(height, fov_deg))
}

/// Distance that keeps both `width` and `height` in frame for a viewport of
/// the given `aspect` (width / height).
pub fn fit_distance_for_box(width: f32, height: f32, aspect: f32, fov_deg: f32) -> SceneResult<f32> {
    validate_positive("aspect", aspect)?;
    try_fit_distance(height.max(width / aspect), fov_deg)
}

/// Reposition every [`CameraFit`] camera whenever the layout or viewport changes.
///
/// The camera sits on the +Z axis looking at the box centre; the fit is
/// measured to the front face so the whole opening stays visible.
///
/// The box is fitted against the *viewport* aspect.  [`Layout::compute`]
/// sizes the box to that same aspect, so height binds; width only binds for
/// a box wider than the viewport.
pub fn camera_fit_system(
    layout: Res<Layout>,
    viewport: Res<Viewport>,
    config: Res<SceneConfig>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<CameraFit>>,
) {
    if !layout.is_changed() && !viewport.is_changed() {
        return;
    }

    let distance = match fit_distance_for_box(
        layout.width,
        layout.height,
        viewport.aspect(),
        config.camera_fov_deg,
    ) {
        Ok(d) => d,
        Err(e) => {
            warn!("[camera] Keeping previous camera fit: {e}");
            return;
        }
    };

    for (mut transform, mut projection) in cameras.iter_mut() {
        *transform = Transform::from_xyz(0.0, 0.0, layout.depth / 2.0 + distance)
            .looking_at(Vec3::ZERO, Vec3::Y);
        if let Projection::Perspective(ref mut perspective) = *projection {
            perspective.fov = config.camera_fov_deg.to_radians();
            perspective.aspect_ratio = viewport.aspect();
        }
    }

    debug!("[camera] Fit distance {distance:.3} for {}x{} box", layout.width, layout.height);
}
