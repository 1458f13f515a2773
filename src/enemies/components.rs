//! Live creature state.

use bevy::prelude::*;

use super::data::CreatureKind;

/// A hostile creature chasing the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub kind: CreatureKind,
    pub position: Vec3,
    pub speed: f32,
    pub health: i32,
    pub alive: bool,
}

impl Creature {
    pub fn new(kind: CreatureKind, position: Vec3, speed: f32) -> Self {
        Self {
            kind,
            position,
            speed,
            health: kind.stats().health,
            alive: true,
        }
    }

    /// Walk toward `target` on the ground plane.
    pub fn advance_toward(&mut self, target: Vec3, delta: f32) {
        let to_target = Vec3::new(
            target.x - self.position.x,
            0.0,
            target.z - self.position.z,
        );
        let step = to_target.normalize_or_zero() * self.speed * delta;
        // Never overshoot the target in a long step
        if step.length_squared() >= to_target.length_squared() {
            self.position.x = target.x;
            self.position.z = target.z;
        } else {
            self.position += step;
        }
    }

    /// Apply damage and return whether this hit killed the creature.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        if self.health <= 0 {
            self.alive = false;
        }
        !self.alive
    }
}
