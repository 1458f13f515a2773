//! Player plugin - input sampling and the follow camera.

use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::transform::TransformSystem;

use super::camera;
use super::controls;
use crate::core::GameState;

/// Player plugin - feeds device input to the simulation and tracks the player with the camera.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, camera::spawn_camera)
            .add_systems(OnEnter(GameState::InGame), controls::reset_input)
            .add_systems(
                PreUpdate,
                controls::read_input
                    .after(InputSystem)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                PostUpdate,
                camera::follow_player.before(TransformSystem::TransformPropagate),
            );
    }
}
