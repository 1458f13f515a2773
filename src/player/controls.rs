//! Keyboard and mouse sampling into the per-frame input snapshot.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::camera::PlayerCamera;
use crate::core::InputSnapshot;

/// Sample the devices once per frame.
///
/// Movement is read from WASD or the arrow keys, with W/Up pushing toward -Z
/// (away from the camera). Aim is the cursor ray projected onto the ground plane.
pub fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<PlayerCamera>>,
    mut input: ResMut<InputSnapshot>,
) {
    let mut movement = Vec2::ZERO;
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        movement.y -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        movement.y += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        movement.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        movement.x += 1.0;
    }

    // Keep the last aim point while the cursor is outside the window
    let aim_point = cursor_ground_point(&window_query, &camera_query).or(input.aim_point);

    *input = InputSnapshot {
        movement,
        aim_point,
        fire: keyboard.pressed(KeyCode::Space) || mouse.pressed(MouseButton::Left),
    };
}

/// Project the cursor onto the y = 0 plane.
fn cursor_ground_point(
    window_query: &Query<&Window, With<PrimaryWindow>>,
    camera_query: &Query<(&Camera, &GlobalTransform), With<PlayerCamera>>,
) -> Option<Vec3> {
    let window = window_query.get_single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, camera_transform) = camera_query.get_single().ok()?;

    let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
    let distance = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y))?;
    Some(ray.get_point(distance))
}

/// Clear the snapshot left over from the previous run.
pub fn reset_input(mut input: ResMut<InputSnapshot>) {
    *input = InputSnapshot::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn entering_a_run_clears_the_last_snapshot() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<GameState>()
            .init_resource::<InputSnapshot>()
            .add_systems(OnEnter(GameState::InGame), reset_input);
        app.update();

        *app.world_mut().resource_mut::<InputSnapshot>() = InputSnapshot {
            movement: Vec2::new(1.0, 0.0),
            aim_point: Some(Vec3::new(4.0, 0.0, -2.0)),
            fire: true,
        };
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::InGame);
        app.update();

        assert_eq!(*app.world().resource::<InputSnapshot>(), InputSnapshot::default());
    }
}
