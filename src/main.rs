//! Last Stand - Entry Point
//!
//! A top-down zombie survival game.
//!
//! Controls:
//! - 1 / 2: Start as Max / Alex
//! - WASD or arrows: Move
//! - Mouse: Aim
//! - Space or left click: Fire
//! - Escape: Give up the run
//! - Enter / R: Retry / back to menu after dying

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Last Stand".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(last_stand::LastStandPlugin)

        .run();
}
