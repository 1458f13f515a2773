//! Player state for the current run.

use bevy::prelude::*;
use std::fmt;

use crate::combat::{Muzzle, WeaponStateMachine};
use crate::core::{CombatTuning, PlayerTuning};

/// Cosmetic character pick made on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterVariant {
    /// Tactical vest, cap.
    #[default]
    Max,
    /// Tank top, ponytail.
    Alex,
}

impl fmt::Display for CharacterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterVariant::Max => f.write_str("Max"),
            CharacterVariant::Alex => f.write_str("Alex"),
        }
    }
}

/// The survivor: position, facing, health and weapon.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub variant: CharacterVariant,
    /// Feet position; height stays on the ground.
    pub position: Vec3,
    /// Unit forward vector on the ground plane.
    pub facing: Vec3,
    pub speed: f32,
    /// Tracked for display; creatures end the run on contact instead.
    pub health: i32,
    pub weapons: WeaponStateMachine,
}

impl Player {
    pub fn new(variant: CharacterVariant, tuning: &PlayerTuning) -> Self {
        Self {
            variant,
            position: Vec3::ZERO,
            facing: Vec3::Z,
            speed: tuning.move_speed,
            health: tuning.max_health,
            weapons: WeaponStateMachine::default(),
        }
    }

    /// Projectile spawn point: chest height, a little in front of the player.
    pub fn muzzle(&self, player: &PlayerTuning, combat: &CombatTuning) -> Muzzle {
        Muzzle {
            origin: self.position
                + Vec3::Y * player.muzzle_height
                + self.facing * player.muzzle_offset,
            direction: self.facing,
            lifetime: combat.projectile_lifetime,
            melee_lifetime: combat.melee_lifetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muzzle_sits_in_front_at_chest_height() {
        let mut player = Player::new(CharacterVariant::Alex, &PlayerTuning::default());
        player.position = Vec3::new(2.0, 0.0, 3.0);
        player.facing = Vec3::X;

        let muzzle = player.muzzle(&PlayerTuning::default(), &CombatTuning::default());
        assert!((muzzle.origin - Vec3::new(2.8, 1.4, 3.0)).length() < 1e-5);
        assert_eq!(muzzle.direction, Vec3::X);
    }
}
