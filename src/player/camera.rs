//! Top-down follow camera.

use bevy::prelude::*;

use crate::game::Simulation;

/// Camera position relative to the player.
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 20.0, 20.0);

/// Marker for the gameplay camera; the cursor ray is cast from it.
#[derive(Component)]
pub struct PlayerCamera;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
        PlayerCamera,
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Keep the camera at a fixed offset above and behind the player.
pub fn follow_player(
    simulation: Res<Simulation>,
    mut camera_query: Query<&mut Transform, With<PlayerCamera>>,
) {
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };

    let target = simulation.player().position;
    *transform = Transform::from_translation(target + CAMERA_OFFSET).looking_at(target, Vec3::Y);
}
