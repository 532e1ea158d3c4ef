mod animation;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod fighter;
mod input;
mod physics;
mod stage;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Shoto Dojo".to_string(),
                    resolution: (640, 448).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        input::InputPlugin,
        animation::AnimationPlugin,
        fighter::FighterPlugin,
        physics::PhysicsPlugin,
        stage::StagePlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
