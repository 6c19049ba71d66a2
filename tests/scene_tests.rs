//! Headless tests for the scroll → gravity pipeline and world rebuilds.
//!
//! These tests use [`MinimalPlugins`] with [`ScrollGravityPlugin`] only (no
//! window or renderer), so they run fast and deterministically in CI.  Time
//! advances by a fixed 16 ms per update.
//!
//! Covered scenarios:
//! 1. The first frame classifies the default viewport and builds the world.
//! 2. Crossing a breakpoint rebuilds the world with the new profile.
//! 3. Resizing within a breakpoint keeps the bodies, refits the walls and
//!    pulls stray bodies back inside.
//! 4. A wheel step produces a gravity spike, then the opposite spike, then rest.
//!    The opt-in clamp caps both spikes.
//! 5. Gravity changes wake sleeping bodies; steady gravity leaves them asleep.
//! 6. A rebuild request respawns everything.
//! 7. Keyboard scrolling moves the target and stops at both ends.
//! 8. Shrinking the viewport re-clamps the page scroll.
//! 9. The fitted camera follows layout and viewport changes.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::Sleeping;
use scroll_gravity::breakpoint::{Breakpoint, BreakpointState};
use scroll_gravity::camera_fit::{self, fit_distance, CameraFit};
use scroll_gravity::config::{ConfigPath, SceneConfig};
use scroll_gravity::constants::{DESKTOP_BODY_COUNT, MOBILE_BODY_COUNT};
use scroll_gravity::gravity::SceneGravity;
use scroll_gravity::layout::Layout;
use scroll_gravity::page::PageScroll;
use scroll_gravity::simulation::{SceneSet, ScrollGravityPlugin};
use scroll_gravity::viewport::Viewport;
use scroll_gravity::world::{Body, RebuildWorld, Wall, WallSide, WorldStats};
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a headless app at the default 1200x680 viewport with immediate
/// (unsmoothed) scrolling, a fixed 16 ms frame time, and no config file.
fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, ScrollGravityPlugin));
    app.insert_resource(ConfigPath(None));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)));
    app.insert_resource(SceneConfig {
        scroll_smoothing: 0.0,
        ..Default::default()
    });
    app
}

/// Press `key` for exactly one frame.
fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

fn scroll_position(app: &App) -> f32 {
    app.world().resource::<PageScroll>().position
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, F>()
        .iter(app.world())
        .count()
}

fn gravity_y(app: &App) -> f32 {
    app.world().resource::<SceneGravity>().0.y
}

fn wheel_lines(app: &mut App, lines: f32) {
    app.world_mut().write_message(MouseWheel {
        unit: MouseScrollUnit::Line,
        x: 0.0,
        y: lines,
        window: Entity::PLACEHOLDER,
    });
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn first_frame_builds_desktop_world() {
    let mut app = headless_app();
    app.update();

    assert_eq!(
        app.world().resource::<BreakpointState>().0,
        Some(Breakpoint::Desktop),
        "a 1200 px viewport must classify as Desktop"
    );
    assert_eq!(count::<With<Body>>(&mut app), DESKTOP_BODY_COUNT);
    assert_eq!(count::<With<Wall>>(&mut app), 6);
    assert_eq!(app.world().resource::<WorldStats>().rebuilds, 1);
}

#[test]
fn crossing_breakpoint_rebuilds_with_new_profile() {
    let mut app = headless_app();
    app.update();

    *app.world_mut().resource_mut::<Viewport>() = Viewport::new(600.0, 900.0);
    app.update();

    assert_eq!(
        app.world().resource::<BreakpointState>().0,
        Some(Breakpoint::Mobile)
    );
    assert_eq!(count::<With<Body>>(&mut app), MOBILE_BODY_COUNT);
    assert_eq!(count::<With<Wall>>(&mut app), 6, "old walls must be despawned");
    assert_eq!(app.world().resource::<WorldStats>().rebuilds, 2);
}

#[test]
fn resize_within_breakpoint_keeps_bodies() {
    let mut app = headless_app();
    app.update();

    let before: Vec<Entity> = app
        .world_mut()
        .query_filtered::<Entity, With<Body>>()
        .iter(app.world())
        .collect();

    *app.world_mut().resource_mut::<Viewport>() = Viewport::new(1400.0, 700.0);
    app.update();

    let after: Vec<Entity> = app
        .world_mut()
        .query_filtered::<Entity, With<Body>>()
        .iter(app.world())
        .collect();

    assert_eq!(before.len(), after.len());
    assert!(before.iter().all(|e| after.contains(e)), "bodies must survive a refit");
    assert_eq!(count::<With<Wall>>(&mut app), 6);
    assert_eq!(app.world().resource::<WorldStats>().rebuilds, 1);
}

#[test]
fn shrinking_box_refits_walls_and_clamps_bodies() {
    let mut app = headless_app();
    app.update();

    // Park one body near the right wall of the wide 1200x680 box.
    let stray = app
        .world_mut()
        .query_filtered::<Entity, With<Body>>()
        .iter(app.world())
        .next()
        .unwrap();
    app.world_mut()
        .get_mut::<Transform>(stray)
        .unwrap()
        .translation = Vec3::new(8.0, 4.9, 1.9);

    // Still Desktop, but the box narrows to 10.3 m.
    *app.world_mut().resource_mut::<Viewport>() = Viewport::new(1030.0, 1000.0);
    app.update();
    assert_eq!(app.world().resource::<WorldStats>().rebuilds, 1);

    let half = app.world().resource::<Layout>().half_extents();
    assert!((half - Vec3::new(5.15, 5.0, 2.0)).abs().max_element() < 1e-4);

    let moved = app.world().get::<Transform>(stray).unwrap().translation;
    assert!((moved - Vec3::new(4.65, 4.5, 1.5)).abs().max_element() < 1e-4);

    let mut bodies = app.world_mut().query::<(&Body, &Transform)>();
    for (body, transform) in bodies.iter(app.world()) {
        let overhang = transform.translation.abs() + Vec3::splat(body.size / 2.0) - half;
        assert!(overhang.max_element() <= 1e-4, "body outside refit box: {overhang}");
    }

    let mut walls = app.world_mut().query::<(&Wall, &Transform)>();
    let (right, right_transform) = walls
        .iter(app.world())
        .find(|(wall, _)| wall.side == WallSide::Right)
        .unwrap();
    assert!((right.half_extents - Vec3::new(0.25, 5.0, 2.5)).abs().max_element() < 1e-4);
    assert!((right_transform.translation.x - 5.4).abs() < 1e-4);
}

#[test]
fn wheel_step_spikes_gravity_then_settles() {
    let mut app = headless_app();
    // Baseline frames: clock starts, kinematics see a still page.
    app.update();
    app.update();
    app.update();
    assert!((gravity_y(&app) + 9.8).abs() < 1e-4);

    // Three lines down = 120 px in one 16 ms frame.
    // accel = 120 / 0.016² px/s², at 680 / 10 = 68 px/m.
    let spike = 120.0 / (0.016 * 0.016) / 68.0;
    wheel_lines(&mut app, -3.0);
    app.update();
    assert_eq!(scroll_position(&app), 120.0);
    assert!(
        (gravity_y(&app) - (spike - 9.8)).abs() < 0.5,
        "gravity must follow accel / ppm - 9.8, got {}",
        gravity_y(&app)
    );

    // Scroll stops: equal and opposite acceleration.
    app.update();
    assert!((gravity_y(&app) - (-spike - 9.8)).abs() < 0.5);

    // At rest again.
    app.update();
    assert!((gravity_y(&app) + 9.8).abs() < 1e-4);
}

#[test]
fn configured_clamp_caps_scroll_term() {
    let mut app = headless_app();
    app.insert_resource(SceneConfig {
        scroll_smoothing: 0.0,
        gravity_scroll_clamp: 60.0,
        ..Default::default()
    });
    app.update();
    app.update();

    wheel_lines(&mut app, -3.0);
    app.update();
    assert!((gravity_y(&app) - 50.2).abs() < 1e-3);

    app.update();
    assert!((gravity_y(&app) + 69.8).abs() < 1e-3);
}

#[test]
fn wheel_up_at_top_of_page_does_nothing() {
    let mut app = headless_app();
    app.update();
    app.update();

    wheel_lines(&mut app, 5.0);
    app.update();

    assert_eq!(app.world().resource::<PageScroll>().position, 0.0);
    assert!((gravity_y(&app) + 9.8).abs() < 1e-4);
}

#[test]
fn gravity_change_wakes_sleeping_bodies() {
    let mut app = headless_app();
    app.update();
    app.update();

    let sleeper = app
        .world_mut()
        .spawn(Sleeping {
            sleeping: true,
            ..Default::default()
        })
        .id();

    // Steady gravity: the sleeper is left alone.
    app.update();
    assert!(app.world().get::<Sleeping>(sleeper).unwrap().sleeping);

    wheel_lines(&mut app, -1.0);
    app.update();
    assert!(
        !app.world().get::<Sleeping>(sleeper).unwrap().sleeping,
        "a gravity change must wake every body"
    );
}

#[test]
fn rebuild_request_respawns_world() {
    let mut app = headless_app();
    app.update();

    app.world_mut().write_message(RebuildWorld);
    app.update();

    assert_eq!(app.world().resource::<WorldStats>().rebuilds, 2);
    assert_eq!(count::<With<Body>>(&mut app), DESKTOP_BODY_COUNT);
    assert_eq!(count::<With<Wall>>(&mut app), 6);
}

#[test]
fn keyboard_scroll_moves_target_and_stops_at_ends() {
    // 1200x680 viewport, three sections: max scroll is 1360 px.
    let mut app = headless_app();
    app.update();
    assert_eq!(app.world().resource::<PageScroll>().max, 1360.0);

    tap(&mut app, KeyCode::ArrowUp);
    assert_eq!(scroll_position(&app), 0.0, "cannot scroll above the top");

    tap(&mut app, KeyCode::ArrowDown);
    assert_eq!(scroll_position(&app), 40.0);

    tap(&mut app, KeyCode::PageDown);
    assert_eq!(scroll_position(&app), 720.0);

    tap(&mut app, KeyCode::Space);
    assert_eq!(scroll_position(&app), 1360.0, "Space must stop at the bottom");

    tap(&mut app, KeyCode::PageUp);
    assert_eq!(scroll_position(&app), 680.0);

    tap(&mut app, KeyCode::ArrowUp);
    assert_eq!(scroll_position(&app), 640.0);

    tap(&mut app, KeyCode::Home);
    assert_eq!(scroll_position(&app), 0.0);

    tap(&mut app, KeyCode::End);
    assert_eq!(scroll_position(&app), 1360.0);
}

#[test]
fn shorter_viewport_reclamps_page_scroll() {
    let mut app = headless_app();
    app.update();
    tap(&mut app, KeyCode::End);
    assert_eq!(scroll_position(&app), 1360.0);

    // Same width (still Desktop); document shrinks to 3 x 400 px.
    *app.world_mut().resource_mut::<Viewport>() = Viewport::new(1200.0, 400.0);
    app.update();

    let page = *app.world().resource::<PageScroll>();
    assert_eq!(page.max, 800.0);
    assert_eq!(page.target, 800.0);
    assert_eq!(page.position, 800.0);
}

#[test]
fn fitted_camera_follows_layout() {
    let mut app = headless_app();
    app.add_systems(
        Update,
        camera_fit::camera_fit_system.in_set(SceneSet::Visual),
    );
    let camera = app
        .world_mut()
        .spawn((
            CameraFit,
            Transform::default(),
            Projection::Perspective(PerspectiveProjection::default()),
        ))
        .id();
    app.update();

    let cfg = SceneConfig::default();
    let expected = cfg.box_depth / 2.0 + fit_distance(cfg.wall_length, cfg.camera_fov_deg);
    let z = app.world().get::<Transform>(camera).unwrap().translation.z;
    assert!((z - expected).abs() < 1e-4, "camera z {z}, expected {expected}");

    // Viewport change: the projection takes the new aspect.
    *app.world_mut().resource_mut::<Viewport>() = Viewport::new(1030.0, 1000.0);
    app.update();
    let Projection::Perspective(perspective) = app.world().get::<Projection>(camera).unwrap() else {
        panic!("camera projection must stay perspective");
    };
    assert!((perspective.aspect_ratio - 1.03).abs() < 1e-4);
    assert!((perspective.fov - cfg.camera_fov_deg.to_radians()).abs() < 1e-6);

    // A taller box pushes the camera back.
    app.world_mut().resource_mut::<SceneConfig>().wall_length = 12.0;
    app.update();
    let expected = cfg.box_depth / 2.0 + fit_distance(12.0, cfg.camera_fov_deg);
    let z = app.world().get::<Transform>(camera).unwrap().translation.z;
    assert!((z - expected).abs() < 1e-4, "camera z {z}, expected {expected}");
}
