//! Centralised scene, physics and scrolling constants.
//!
//! All tuneable values live here so they can be found and modified in one
//! place.  [`crate::config::SceneConfig`] mirrors every value and lets
//! `assets/scene.toml` override any subset at startup.

// ── Window ────────────────────────────────────────────────────────────────────

/// Initial window width in logical pixels.
pub const WINDOW_WIDTH: u32 = 1200;

/// Initial window height in logical pixels.
pub const WINDOW_HEIGHT: u32 = 680;

// ── Camera ────────────────────────────────────────────────────────────────────

/// Vertical field of view of the perspective camera, in degrees.
pub const CAMERA_FOV_DEG: f32 = 75.0;

/// Near clip plane (m).
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clip plane (m).
pub const CAMERA_FAR: f32 = 1000.0;

// ── World box ─────────────────────────────────────────────────────────────────

/// Height of the wall box (m).  The full viewport height maps onto this
/// length, which fixes the pixels-per-meter ratio used by the gravity mapping.
pub const WALL_LENGTH: f32 = 10.0;

/// Thickness of every boundary wall (m).
pub const WALL_THICKNESS: f32 = 0.5;

/// Depth of the wall box along Z (m).
pub const BOX_DEPTH: f32 = 4.0;

// ── Gravity ───────────────────────────────────────────────────────────────────

/// Magnitude of resting gravity (m/s²).  World gravity is `scroll − BASE_GRAVITY`.
pub const BASE_GRAVITY: f32 = 9.8;

/// Largest scroll contribution (m/s²) added to gravity in either direction.
///
/// `0.0` disables the clamp, so gravity follows `accel / ppm − BASE_GRAVITY`
/// exactly.  Set a positive value in `assets/scene.toml` to cap wheel flicks.
pub const GRAVITY_SCROLL_CLAMP: f32 = 0.0;

// ── Bodies ────────────────────────────────────────────────────────────────────

/// Restitution coefficient for bodies and walls.
pub const BODY_RESTITUTION: f32 = 0.3;

/// Friction coefficient for bodies and walls.
pub const BODY_FRICTION: f32 = 0.6;

/// Seed for the spawn RNG so every rebuild with the same profile is identical.
pub const SPAWN_SEED: u64 = 0x5C01_1000;

// ── Breakpoints ───────────────────────────────────────────────────────────────

/// Viewports at least this wide (px) are `Tablet`.
pub const TABLET_MIN_WIDTH: f32 = 768.0;

/// Viewports at least this wide (px) are `Desktop`.
pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;

pub const MOBILE_BODY_COUNT: usize = 4;
pub const MOBILE_BODY_SIZE: f32 = 1.4;

pub const TABLET_BODY_COUNT: usize = 8;
pub const TABLET_BODY_SIZE: f32 = 1.2;

pub const DESKTOP_BODY_COUNT: usize = 14;
pub const DESKTOP_BODY_SIZE: f32 = 1.0;

// ── Page ──────────────────────────────────────────────────────────────────────

/// Number of full-viewport sections on the virtual page (hero, about, footer).
pub const PAGE_SECTIONS: u32 = 3;

/// Pixels scrolled per mouse-wheel line step or arrow key press.
pub const SCROLL_LINE_HEIGHT: f32 = 40.0;

/// Exponential smoothing rate (1/s) easing the scroll position toward its target.
///
/// Higher values catch up faster.  `0.0` jumps immediately, which turns each
/// wheel step into a single-frame acceleration spike.
pub const SCROLL_SMOOTHING: f32 = 12.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

pub const HERO_FONT_SIZE: f32 = 48.0;
pub const STATS_FONT_SIZE: f32 = 16.0;
