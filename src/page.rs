//! Virtual scrolling document.
//!
//! The window shows one viewport of a taller page made of
//! [`SceneConfig::page_sections`] full-height sections.  Mouse wheel and
//! keyboard input move a scroll *target*; the visible scroll *position*
//! eases toward it the way browser smooth scrolling does.  The position is
//! what [`crate::scroll`] samples every frame.

use crate::config::SceneConfig;
use crate::viewport::Viewport;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Scroll state of the virtual page, in pixels from the top.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PageScroll {
    /// Currently displayed scroll offset.
    pub position: f32,
    /// Offset the page is easing toward.
    pub target: f32,
    /// Largest valid offset (`document_height - viewport_height`).
    pub max: f32,
}

impl PageScroll {
    /// Move the target by `delta` pixels, clamped into `[0, max]`.
    pub fn scroll_by(&mut self, delta: f32) {
        self.target = (self.target + delta).clamp(0.0, self.max);
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.target = offset.clamp(0.0, self.max);
    }

    /// Change the scrollable range, pulling position and target back inside.
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.target = self.target.clamp(0.0, self.max);
        self.position = self.position.clamp(0.0, self.max);
    }

    /// Ease `position` toward `target`.
    ///
    /// `rate <= 0` snaps immediately.  Otherwise the remaining distance decays
    /// by `exp(-rate * dt)`, which is frame-rate independent.  Sub-pixel
    /// remainders snap so the page comes to rest exactly.
    pub fn advance(&mut self, rate: f32, dt: f32) {
        if rate <= 0.0 {
            self.position = self.target;
            return;
        }
        let remaining = self.target - self.position;
        let next = self.target - remaining * (-rate * dt).exp();
        self.position = if (self.target - next).abs() < 0.5 {
            self.target
        } else {
            next
        };
    }
}

/// Total document height for `viewport_height`.
#[inline]
pub fn document_height(viewport_height: f32, sections: u32) -> f32 {
    viewport_height * sections as f32
}

/// Keep the scrollable range in sync with the viewport height.
pub fn page_extent_system(
    viewport: Res<Viewport>,
    config: Res<SceneConfig>,
    mut page: ResMut<PageScroll>,
) {
    if !viewport.is_changed() && !config.is_changed() {
        return;
    }
    page.set_max(document_height(viewport.height, config.page_sections) - viewport.height);
}

/// Translate mouse wheel messages into scroll target movement.
///
/// Wheel "up" (positive y) scrolls toward the top of the page, as in a browser.
pub fn wheel_scroll_system(
    mut wheel: MessageReader<MouseWheel>,
    config: Res<SceneConfig>,
    mut page: ResMut<PageScroll>,
) {
    for event in wheel.read() {
        let pixels = match event.unit {
            MouseScrollUnit::Line => event.y * config.scroll_line_height,
            MouseScrollUnit::Pixel => event.y,
        };
        page.scroll_by(-pixels);
    }
}

/// Keyboard scrolling: arrows move a line, Page/Space a viewport, Home/End the ends.
pub fn keyboard_scroll_system(
    keys: Res<ButtonInput<KeyCode>>,
    viewport: Res<Viewport>,
    config: Res<SceneConfig>,
    mut page: ResMut<PageScroll>,
) {
    let line = config.scroll_line_height;
    let screen = viewport.height;

    if keys.just_pressed(KeyCode::ArrowDown) {
        page.scroll_by(line);
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        page.scroll_by(-line);
    }
    if keys.just_pressed(KeyCode::PageDown) || keys.just_pressed(KeyCode::Space) {
        page.scroll_by(screen);
    }
    if keys.just_pressed(KeyCode::PageUp) {
        page.scroll_by(-screen);
    }
    if keys.just_pressed(KeyCode::Home) {
        page.scroll_to(0.0);
    }
    if keys.just_pressed(KeyCode::End) {
        let end = page.max;
        page.scroll_to(end);
    }
}

/// Ease the displayed scroll position toward its target.
pub fn smooth_scroll_system(time: Res<Time>, config: Res<SceneConfig>, mut page: ResMut<PageScroll>) {
    if page.position == page.target {
        return;
    }
    page.advance(config.scroll_smoothing, time.delta_secs());
}
