//! Movement and facing resolution against the obstacle field.

use bevy::math::bounding::Aabb3d;
use bevy::prelude::*;

use super::components::Player;
use crate::core::{InputSnapshot, PlayerTuning};
use crate::world::ObstacleField;

/// Move the player by the input intent, rejecting the whole step on any overlap.
///
/// There is no sliding along walls: a blocked move leaves the player where
/// it was. Returns whether the player moved.
pub fn resolve_movement(
    player: &mut Player,
    input: &InputSnapshot,
    obstacles: &ObstacleField,
    tuning: &PlayerTuning,
    delta: f32,
) -> bool {
    let intent = input.movement_world();
    if intent == Vec3::ZERO {
        return false;
    }

    let candidate = player.position + intent * player.speed * delta;
    let (hx, hy, hz) = tuning.half_extents;
    let body = Aabb3d::new(
        candidate + Vec3::Y * tuning.body_center_height,
        Vec3::new(hx, hy, hz),
    );

    if obstacles.intersects(&body) {
        return false;
    }

    player.position = candidate;
    true
}

/// Turn to face the aim point, staying level with the ground.
///
/// An aim point directly on top of the player keeps the previous facing.
pub fn resolve_facing(player: &mut Player, input: &InputSnapshot) {
    let Some(target) = input.aim_point else {
        return;
    };

    let level_target = Vec3::new(target.x, player.position.y, target.z);
    if let Some(facing) = (level_target - player.position).try_normalize() {
        player.facing = facing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::CharacterVariant;
    use crate::world::Obstacle;

    fn player() -> Player {
        Player::new(CharacterVariant::Max, &PlayerTuning::default())
    }

    fn moving(x: f32, z: f32) -> InputSnapshot {
        InputSnapshot {
            movement: Vec2::new(x, z),
            ..default()
        }
    }

    #[test]
    fn zero_intent_keeps_position() {
        let mut player = player();
        player.position = Vec3::new(3.0, 0.0, -2.0);
        let moved = resolve_movement(
            &mut player,
            &InputSnapshot::default(),
            &ObstacleField::default(),
            &PlayerTuning::default(),
            0.5,
        );
        assert!(!moved);
        assert_eq!(player.position, Vec3::new(3.0, 0.0, -2.0));
    }

    #[test]
    fn moves_at_speed_on_open_ground() {
        let mut player = player();
        let moved = resolve_movement(
            &mut player,
            &moving(1.0, 0.0),
            &ObstacleField::default(),
            &PlayerTuning::default(),
            0.1,
        );
        assert!(moved);
        assert!((player.position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn blocked_move_is_rejected_entirely() {
        let wall = Obstacle::from_center_half_size(Vec3::new(1.5, 5.0, 0.0), Vec3::new(1.0, 5.0, 10.0));
        let field = ObstacleField::new(vec![wall]);
        let mut player = player();

        // Diagonal move would clip the wall; no sliding along it
        let moved = resolve_movement(
            &mut player,
            &moving(0.6, 0.8),
            &field,
            &PlayerTuning::default(),
            0.05,
        );
        assert!(!moved);
        assert_eq!(player.position, Vec3::ZERO);

        // Moving away is fine
        assert!(resolve_movement(
            &mut player,
            &moving(-1.0, 0.0),
            &field,
            &PlayerTuning::default(),
            0.05,
        ));
    }

    #[test]
    fn faces_aim_point_level() {
        let mut player = player();
        let input = InputSnapshot {
            aim_point: Some(Vec3::new(0.0, 8.0, -4.0)),
            ..default()
        };
        resolve_facing(&mut player, &input);
        assert!((player.facing - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn degenerate_aim_keeps_facing() {
        let mut player = player();
        player.facing = Vec3::X;

        resolve_facing(&mut player, &InputSnapshot::default());
        assert_eq!(player.facing, Vec3::X);

        let on_top = InputSnapshot {
            aim_point: Some(Vec3::new(0.0, 3.0, 0.0)),
            ..default()
        };
        resolve_facing(&mut player, &on_top);
        assert_eq!(player.facing, Vec3::X);
    }
}
