//! Plugins wiring the scene together.
//!
//! [`ScrollGravityPlugin`] holds everything that runs without a renderer
//! (viewport tracking, layout, breakpoints, the physics world, scrolling and
//! gravity) so it can be driven headlessly in tests.  [`ScenePlugin`] adds the
//! camera, lights, meshes and UI on top.
//!
//! ## Update order
//!
//! | Set      | Systems                                                   |
//! |----------|-----------------------------------------------------------|
//! | `Layout` | viewport → layout → page extent → breakpoint              |
//! | `World`  | reset key → world rebuild / wall refit                    |
//! | `Scroll` | wheel → keyboard → smoothing → kinematics                 |
//! | `Gravity`| scroll gravity → apply to Rapier + wake bodies            |
//! | `Visual` | camera fit, mesh attachment, HUD                          |

use crate::breakpoint::{self, BreakpointChanged, BreakpointState};
use crate::camera_fit;
use crate::config::{self, ConfigPath, SceneConfig};
use crate::gravity::{self, SceneGravity};
use crate::hud;
use crate::layout::{self, Layout};
use crate::page::{self, PageScroll};
use crate::scene;
use crate::scroll::{self, ScrollKinematics};
use crate::viewport::{self, Viewport};
use crate::world::{self, RebuildWorld, WorldStats};
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneSet {
    Layout,
    World,
    Scroll,
    Gravity,
    Visual,
}

pub struct ScrollGravityPlugin;

impl Plugin for ScrollGravityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigPath>()
            .init_resource::<SceneConfig>()
            .init_resource::<Viewport>()
            .init_resource::<Layout>()
            .init_resource::<BreakpointState>()
            .init_resource::<PageScroll>()
            .init_resource::<ScrollKinematics>()
            .init_resource::<SceneGravity>()
            .init_resource::<WorldStats>()
            .add_message::<BreakpointChanged>()
            .add_message::<RebuildWorld>()
            .add_message::<MouseWheel>()
            .init_resource::<ButtonInput<KeyCode>>()
            .configure_sets(
                Update,
                (
                    SceneSet::Layout,
                    SceneSet::World,
                    SceneSet::Scroll,
                    SceneSet::Gravity,
                    SceneSet::Visual,
                )
                    .chain(),
            )
            .add_systems(Startup, config::load_scene_config)
            .add_systems(
                Update,
                (
                    viewport::track_viewport_system,
                    layout::update_layout_system,
                    page::page_extent_system,
                    breakpoint::breakpoint_system,
                )
                    .chain()
                    .in_set(SceneSet::Layout),
            )
            .add_systems(
                Update,
                (world::reset_key_system, world::world_layout_system)
                    .chain()
                    .in_set(SceneSet::World),
            )
            .add_systems(
                Update,
                (
                    page::wheel_scroll_system,
                    page::keyboard_scroll_system,
                    page::smooth_scroll_system,
                    scroll::scroll_kinematics_system,
                )
                    .chain()
                    .in_set(SceneSet::Scroll),
            )
            .add_systems(
                Update,
                (gravity::scroll_gravity_system, gravity::apply_gravity_system)
                    .chain()
                    .in_set(SceneSet::Gravity),
            );
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                scene::setup_camera,
                scene::setup_lights,
                hud::setup_page_sections,
                hud::setup_stats_text,
            )
                .after(config::load_scene_config),
        )
        .add_systems(
            Update,
            (
                camera_fit::camera_fit_system,
                scene::attach_body_mesh_system,
                scene::attach_wall_mesh_system,
                hud::page_section_system,
                hud::toggle_stats_system,
                hud::stats_display_system,
            )
                .in_set(SceneSet::Visual),
        );
    }
}
