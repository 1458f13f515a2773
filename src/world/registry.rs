//! Ownership of every live creature, projectile and weapon drop.

use bevy::prelude::*;

use crate::combat::{Projectile, WeaponKind};
use crate::enemies::Creature;

/// A weapon pickup waiting on the ground.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponDrop {
    pub position: Vec3,
    pub weapon: WeaponKind,
}

/// Live collections for the current run.
///
/// Collections keep insertion order, so iterating creatures from the highest
/// index down visits the most recently spawned first. Removal uses
/// order-preserving `Vec::remove`, which never disturbs lower indices.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    pub creatures: Vec<Creature>,
    pub projectiles: Vec<Projectile>,
    pub drops: Vec<WeaponDrop>,
}

impl EntityRegistry {
    pub fn spawn_creature(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    pub fn spawn_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn spawn_drop(&mut self, drop: WeaponDrop) {
        self.drops.push(drop);
    }

    /// Remove a creature by index, marking it dead.
    pub fn remove_creature(&mut self, index: usize) -> Creature {
        let mut creature = self.creatures.remove(index);
        creature.alive = false;
        creature
    }

    /// Drop every entity, used when a run starts or ends.
    pub fn clear(&mut self) {
        self.creatures.clear();
        self.projectiles.clear();
        self.drops.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty() && self.projectiles.is_empty() && self.drops.is_empty()
    }
}
