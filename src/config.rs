//! Runtime scene configuration loaded from `assets/scene.toml`.
//!
//! [`SceneConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_scene_config`] reads
//! `assets/scene.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about:
//!
//! ```toml
//! camera_fov_deg = 60.0
//! desktop_body_count = 30
//! scroll_smoothing = 0.0
//! ```
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `SceneConfig::default()`.

use crate::breakpoint::{Breakpoint, BreakpointProfile};
use crate::constants::*;
use crate::error::{validate_breakpoints, validate_fov, validate_positive, SceneResult};
use bevy::prelude::*;
use serde::Deserialize;

pub const CONFIG_PATH: &str = "assets/scene.toml";

/// Where [`load_scene_config`] looks for overrides; `None` skips loading.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ConfigPath(pub Option<String>);

impl Default for ConfigPath {
    fn default() -> Self {
        ConfigPath(Some(CONFIG_PATH.to_string()))
    }
}

/// Runtime-tunable scene, physics and scrolling configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    // ── Camera ────────────────────────────────────────────────────────────────
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,

    // ── World box ─────────────────────────────────────────────────────────────
    pub wall_length: f32,
    pub wall_thickness: f32,
    pub box_depth: f32,

    // ── Gravity ───────────────────────────────────────────────────────────────
    pub base_gravity: f32,
    pub gravity_scroll_clamp: f32,

    // ── Bodies ────────────────────────────────────────────────────────────────
    pub body_restitution: f32,
    pub body_friction: f32,
    pub spawn_seed: u64,

    // ── Breakpoints ───────────────────────────────────────────────────────────
    pub tablet_min_width: f32,
    pub desktop_min_width: f32,
    pub mobile_body_count: usize,
    pub mobile_body_size: f32,
    pub tablet_body_count: usize,
    pub tablet_body_size: f32,
    pub desktop_body_count: usize,
    pub desktop_body_size: f32,

    // ── Page ──────────────────────────────────────────────────────────────────
    pub page_sections: u32,
    pub scroll_line_height: f32,
    pub scroll_smoothing: f32,

    // ── HUD ───────────────────────────────────────────────────────────────────
    pub hero_font_size: f32,
    pub stats_font_size: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_fov_deg: CAMERA_FOV_DEG,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            wall_length: WALL_LENGTH,
            wall_thickness: WALL_THICKNESS,
            box_depth: BOX_DEPTH,
            base_gravity: BASE_GRAVITY,
            gravity_scroll_clamp: GRAVITY_SCROLL_CLAMP,
            body_restitution: BODY_RESTITUTION,
            body_friction: BODY_FRICTION,
            spawn_seed: SPAWN_SEED,
            tablet_min_width: TABLET_MIN_WIDTH,
            desktop_min_width: DESKTOP_MIN_WIDTH,
            mobile_body_count: MOBILE_BODY_COUNT,
            mobile_body_size: MOBILE_BODY_SIZE,
            tablet_body_count: TABLET_BODY_COUNT,
            tablet_body_size: TABLET_BODY_SIZE,
            desktop_body_count: DESKTOP_BODY_COUNT,
            desktop_body_size: DESKTOP_BODY_SIZE,
            page_sections: PAGE_SECTIONS,
            scroll_line_height: SCROLL_LINE_HEIGHT,
            scroll_smoothing: SCROLL_SMOOTHING,
            hero_font_size: HERO_FONT_SIZE,
            stats_font_size: STATS_FONT_SIZE,
        }
    }
}

impl SceneConfig {
    /// Parse a TOML document, filling absent keys from the defaults, and
    /// validate the result.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let loaded: SceneConfig = toml::from_str(contents).map_err(|e| e.to_string())?;
        loaded.validate().map_err(|e| e.to_string())?;
        Ok(loaded)
    }

    /// Check every value whose misuse would break the layout math.
    pub fn validate(&self) -> SceneResult<()> {
        validate_fov(self.camera_fov_deg)?;
        validate_positive("camera_near", self.camera_near)?;
        validate_positive("camera_far", self.camera_far)?;
        validate_positive("wall_length", self.wall_length)?;
        validate_positive("wall_thickness", self.wall_thickness)?;
        validate_positive("box_depth", self.box_depth)?;
        validate_positive("mobile_body_size", self.mobile_body_size)?;
        validate_positive("tablet_body_size", self.tablet_body_size)?;
        validate_positive("desktop_body_size", self.desktop_body_size)?;
        validate_positive("scroll_line_height", self.scroll_line_height)?;
        validate_positive("page_sections", self.page_sections as f32)?;
        validate_breakpoints(self.tablet_min_width, self.desktop_min_width)
    }

    /// Body count and edge length used while `breakpoint` is active.
    pub fn profile(&self, breakpoint: Breakpoint) -> BreakpointProfile {
        match breakpoint {
            Breakpoint::Mobile => BreakpointProfile {
                body_count: self.mobile_body_count,
                body_size: self.mobile_body_size,
            },
            Breakpoint::Tablet => BreakpointProfile {
                body_count: self.tablet_body_count,
                body_size: self.tablet_body_size,
            },
            Breakpoint::Desktop => BreakpointProfile {
                body_count: self.desktop_body_count,
                body_size: self.desktop_body_size,
            },
        }
    }
}

/// Startup system: attempt to load the [`ConfigPath`] file (by default
/// `assets/scene.toml`) and overwrite the `SceneConfig` resource with the
/// values present in the file.
///
/// Parse and validation errors are logged but do not abort the scene.  A
/// missing file is silently ignored (defaults are already in place).
pub fn load_scene_config(source: Res<ConfigPath>, mut config: ResMut<SceneConfig>) {
    let Some(path) = source.0.as_deref() else {
        return;
    };
    match std::fs::read_to_string(path) {
        Ok(contents) => match SceneConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("[SETUP] Loaded scene config from {path}");
            }
            Err(e) => {
                warn!("[SETUP] Rejected {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            info!("[SETUP] No {path} found; using compiled defaults");
        }
    }
}
