//! Logical viewport size tracked from the primary window.

use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::validate_viewport;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Logical size (px) of the area the scene is drawn into.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH as f32,
            height: WINDOW_HEIGHT as f32,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Copy the primary window's logical size into [`Viewport`].
///
/// Writes only when the size actually differs so downstream systems can rely
/// on change detection.  A minimised (zero-area) window is ignored.
pub fn track_viewport_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());
    if validate_viewport(width, height).is_err() {
        return;
    }
    viewport.set_if_neq(Viewport::new(width, height));
}
