//! Notifications emitted by the simulation for the presentation layer.
//!
//! The core buffers these while stepping; the game plugin drains them into
//! Bevy's event queue so the view and HUD systems can react without
//! reaching into simulation state.

use bevy::prelude::*;

use crate::combat::WeaponKind;
use crate::enemies::CreatureKind;
use crate::player::CharacterVariant;

/// Something observable happened during a simulation step.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SimEvent {
    RunStarted {
        variant: CharacterVariant,
        high_score: u32,
    },
    RunEnded {
        score: u32,
        high_score: u32,
        /// The run beat the stored high score.
        new_record: bool,
    },
    CreatureSpawned {
        kind: CreatureKind,
        position: Vec3,
    },
    /// A hit that left the creature alive.
    CreatureDamaged {
        kind: CreatureKind,
        position: Vec3,
        remaining_health: i32,
    },
    CreatureKilled {
        kind: CreatureKind,
        position: Vec3,
    },
    ProjectileFired {
        weapon: WeaponKind,
        position: Vec3,
    },
    Explosion {
        position: Vec3,
        kills: u32,
    },
    DropSpawned {
        weapon: WeaponKind,
        position: Vec3,
    },
    WeaponEquipped {
        weapon: WeaponKind,
    },
    /// A limited weapon ran dry and the sidearm was re-equipped.
    WeaponDepleted {
        weapon: WeaponKind,
    },
    ScoreChanged {
        score: u32,
    },
}
