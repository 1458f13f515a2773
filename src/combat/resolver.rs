//! Collision and damage resolution for one simulation step.
//!
//! Hit tests use planar distance compared squared. Creatures are always
//! scanned from the highest index down, so when several overlap a projectile
//! the most recently spawned one takes the hit.

use bevy::prelude::*;

use super::weapons::WeaponStateMachine;
use crate::core::{CombatTuning, SimEvent};
use crate::score::ScoreTracker;
use crate::world::{planar_distance_squared, EntityRegistry};

/// Applies projectile hits, explosions, pickups and contact checks.
#[derive(Debug, Clone)]
pub struct CombatResolver {
    tuning: CombatTuning,
}

impl CombatResolver {
    pub fn new(tuning: CombatTuning) -> Self {
        Self { tuning }
    }

    /// Resolve every live projectile against the live creatures.
    ///
    /// Each projectile hits at most one creature per call. Ranged shots are
    /// consumed by their hit, blade swings persist until they expire, bombs
    /// explode on contact or expiry.
    pub fn resolve_projectiles(
        &self,
        registry: &mut EntityRegistry,
        now: f32,
        score: &mut ScoreTracker,
        events: &mut Vec<SimEvent>,
    ) {
        let projectiles = std::mem::take(&mut registry.projectiles);
        let mut survivors = Vec::with_capacity(projectiles.len());

        for projectile in projectiles {
            if projectile.flags.bomb && projectile.is_expired(now) {
                self.explode(projectile.position, registry, score, events);
                continue;
            }

            let radius = if projectile.flags.melee {
                self.tuning.melee_hit_radius
            } else {
                self.tuning.ranged_hit_radius
            };
            let radius_sq = radius * radius;

            let hit = (0..registry.creatures.len()).rev().find(|&index| {
                let creature = &registry.creatures[index];
                creature.alive
                    && planar_distance_squared(projectile.position, creature.position) < radius_sq
            });

            let mut consumed = false;
            if let Some(index) = hit {
                if projectile.flags.bomb {
                    self.explode(projectile.position, registry, score, events);
                    consumed = true;
                } else {
                    let creature = &mut registry.creatures[index];
                    if creature.take_damage(projectile.damage) {
                        let dead = registry.remove_creature(index);
                        let total = score.record_kill();
                        events.push(SimEvent::CreatureKilled {
                            kind: dead.kind,
                            position: dead.position,
                        });
                        events.push(SimEvent::ScoreChanged { score: total });
                    } else {
                        events.push(SimEvent::CreatureDamaged {
                            kind: creature.kind,
                            position: creature.position,
                            remaining_health: creature.health,
                        });
                    }
                    consumed = !projectile.flags.melee;
                }
            }

            if !consumed && !projectile.is_expired(now) {
                survivors.push(projectile);
            }
        }

        registry.projectiles = survivors;
    }

    /// Kill every creature strictly inside the blast radius of `position`.
    pub fn explode(
        &self,
        position: Vec3,
        registry: &mut EntityRegistry,
        score: &mut ScoreTracker,
        events: &mut Vec<SimEvent>,
    ) -> u32 {
        let radius_sq = self.tuning.explosion_radius * self.tuning.explosion_radius;
        let mut kills = 0;

        for index in (0..registry.creatures.len()).rev() {
            if planar_distance_squared(registry.creatures[index].position, position) < radius_sq {
                let dead = registry.remove_creature(index);
                score.record_kill();
                kills += 1;
                events.push(SimEvent::CreatureKilled {
                    kind: dead.kind,
                    position: dead.position,
                });
            }
        }

        debug!("Explosion at {:?} killed {}", position, kills);
        events.push(SimEvent::Explosion { position, kills });
        if kills > 0 {
            events.push(SimEvent::ScoreChanged {
                score: score.score(),
            });
        }
        kills
    }

    /// Index of a creature touching the player, if any.
    pub fn creature_contact(&self, registry: &EntityRegistry, player: Vec3) -> Option<usize> {
        let radius_sq = self.tuning.contact_radius * self.tuning.contact_radius;
        (0..registry.creatures.len()).rev().find(|&index| {
            planar_distance_squared(registry.creatures[index].position, player) < radius_sq
        })
    }

    /// Equip and remove every drop within reach of the player.
    pub fn collect_pickups(
        &self,
        registry: &mut EntityRegistry,
        player: Vec3,
        weapons: &mut WeaponStateMachine,
        events: &mut Vec<SimEvent>,
    ) {
        let radius_sq = self.tuning.pickup_radius * self.tuning.pickup_radius;
        registry.drops.retain(|drop| {
            if planar_distance_squared(drop.position, player) < radius_sq {
                weapons.equip(drop.weapon);
                info!("Picked up {}", drop.weapon);
                events.push(SimEvent::WeaponEquipped {
                    weapon: drop.weapon,
                });
                false
            } else {
                true
            }
        });
    }
}
