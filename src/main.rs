use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier3d::prelude::*;
use std::env;

use scroll_gravity::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use scroll_gravity::simulation::{ScenePlugin, ScrollGravityPlugin};

fn main() {
    // Collider wireframes for tuning wall and body sizes.
    let debug_render = env::var("SCROLL_GRAVITY_DEBUG").is_ok();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hello RAPIER3D!".into(),
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.06, 0.06, 0.09)))
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
    .add_plugins((ScrollGravityPlugin, ScenePlugin));

    if debug_render {
        app.add_plugins(RapierDebugRenderPlugin::default());
        info!("Collider debug rendering enabled");
    }

    app.run();
}
