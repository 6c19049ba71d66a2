//! Responsive breakpoints, evaluated like CSS `min-width` media queries.
//!
//! | Breakpoint | Viewport width                         |
//! |------------|----------------------------------------|
//! | `Mobile`   | `< tablet_min_width`                   |
//! | `Tablet`   | `tablet_min_width ..< desktop_min_width` |
//! | `Desktop`  | `>= desktop_min_width`                 |
//!
//! Only transitions emit a [`BreakpointChanged`] message; the physics world
//! listens for it and rebuilds itself with the new [`BreakpointProfile`].

use crate::config::SceneConfig;
use crate::viewport::Viewport;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn classify(width: f32, tablet_min: f32, desktop_min: f32) -> Self {
        if width >= desktop_min {
            Breakpoint::Desktop
        } else if width >= tablet_min {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "MOBILE",
            Breakpoint::Tablet => "TABLET",
            Breakpoint::Desktop => "DESKTOP",
        }
    }
}

/// What the physics world looks like while a breakpoint is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointProfile {
    pub body_count: usize,
    /// Edge length of each cube body (m).
    pub body_size: f32,
}

/// Currently active breakpoint; `None` until the first classification.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct BreakpointState(pub Option<Breakpoint>);

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct BreakpointChanged {
    pub from: Option<Breakpoint>,
    pub to: Breakpoint,
}

/// Re-classify the viewport whenever it changes and announce transitions.
pub fn breakpoint_system(
    viewport: Res<Viewport>,
    config: Res<SceneConfig>,
    mut state: ResMut<BreakpointState>,
    mut changed: MessageWriter<BreakpointChanged>,
) {
    if !viewport.is_changed() && !config.is_changed() && state.0.is_some() {
        return;
    }
    let next = Breakpoint::classify(
        viewport.width,
        config.tablet_min_width,
        config.desktop_min_width,
    );
    if state.0 == Some(next) {
        return;
    }
    info!(
        "[breakpoint] {} -> {} at {} px",
        state.0.map_or("NONE", Breakpoint::label),
        next.label(),
        viewport.width
    );
    changed.write(BreakpointChanged {
        from: state.0,
        to: next,
    });
    state.0 = Some(next);
}
