//! Finite-difference estimate of scroll velocity and acceleration.
//!
//! Sampled once per frame from [`PageScroll::position`]:
//!
//! ```text
//! velocity     = Δposition / Δtime   (px/s)
//! acceleration = Δvelocity / Δtime   (px/s²)
//! ```
//!
//! The first sample only establishes a baseline; both derivatives are zero
//! until a second frame arrives.

use crate::page::PageScroll;
use bevy::prelude::*;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollKinematics {
    pub position: f32,
    pub velocity: f32,
    pub acceleration: f32,
    pub samples: u64,
}

impl ScrollKinematics {
    /// Fold a new position sample taken `dt` seconds after the previous one.
    ///
    /// A non-positive `dt` (paused clock, duplicate frame) is ignored.
    pub fn sample(&mut self, position: f32, dt: f32) {
        if self.samples == 0 {
            *self = ScrollKinematics {
                position,
                samples: 1,
                ..Default::default()
            };
            return;
        }
        if dt <= 0.0 {
            return;
        }
        let velocity = (position - self.position) / dt;
        self.acceleration = (velocity - self.velocity) / dt;
        self.velocity = velocity;
        self.position = position;
        self.samples += 1;
    }
}

/// Sample the page scroll position for this frame.
pub fn scroll_kinematics_system(
    time: Res<Time>,
    page: Res<PageScroll>,
    mut kinematics: ResMut<ScrollKinematics>,
) {
    kinematics.sample(page.position, time.delta_secs());
}
