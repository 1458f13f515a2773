//! Time-driven creature and weapon drop spawning.
//!
//! Creatures arrive on a shrinking interval that ramps difficulty up to a
//! floor. Weapon drops arrive on a fixed interval and never offer the weapon
//! the player already holds.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

use super::components::Creature;
use super::data::CreatureKind;
use crate::combat::WeaponKind;
use crate::core::SpawnTuning;
use crate::world::WeaponDrop;

/// Weighted creature draw: three standard for every dog.
const CREATURE_TABLE: [CreatureKind; 4] = [
    CreatureKind::Standard,
    CreatureKind::Standard,
    CreatureKind::Standard,
    CreatureKind::Dog,
];

/// Weapons that can appear as pickups.
const DROP_TABLE: [WeaponKind; 3] = [WeaponKind::Rifle, WeaponKind::Bomb, WeaponKind::Blade];

/// Entities produced by one director tick.
#[derive(Debug, Default)]
pub struct SpawnBatch {
    pub creature: Option<Creature>,
    pub drop: Option<WeaponDrop>,
}

/// Spawn timers and the current difficulty.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnDirector {
    spawn_timer: f32,
    spawn_interval: f32,
    drop_timer: f32,
    tuning: SpawnTuning,
}

impl SpawnDirector {
    pub fn new(tuning: SpawnTuning) -> Self {
        Self {
            spawn_timer: 0.0,
            spawn_interval: tuning.initial_interval,
            drop_timer: 0.0,
            tuning,
        }
    }

    /// Seconds between creature spawns right now.
    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    /// Back to the start-of-run difficulty.
    pub fn reset(&mut self) {
        self.spawn_timer = 0.0;
        self.drop_timer = 0.0;
        self.spawn_interval = self.tuning.initial_interval;
    }

    /// Advance both timers and spawn whatever is due around `center`.
    pub fn tick(
        &mut self,
        delta: f32,
        center: Vec3,
        equipped: WeaponKind,
        rng: &mut impl Rng,
    ) -> SpawnBatch {
        let mut batch = SpawnBatch::default();

        self.spawn_timer += delta;
        if self.spawn_timer > self.spawn_interval {
            self.spawn_timer = 0.0;
            self.spawn_interval =
                (self.spawn_interval - self.tuning.interval_step).max(self.tuning.min_interval);
            batch.creature = Some(self.spawn_creature(center, rng));
        }

        self.drop_timer += delta;
        if self.drop_timer > self.tuning.drop_interval {
            self.drop_timer = 0.0;
            batch.drop = self.spawn_drop(center, equipped, rng);
        }

        batch
    }

    fn spawn_creature(&self, center: Vec3, rng: &mut impl Rng) -> Creature {
        let position = ring_point(center, self.tuning.creature_radius, 0.0, rng);
        let kind = *CREATURE_TABLE
            .choose(rng)
            .unwrap_or(&CreatureKind::Standard);
        let speed = kind.roll_speed(rng);
        Creature::new(kind, position, speed)
    }

    fn spawn_drop(
        &self,
        center: Vec3,
        equipped: WeaponKind,
        rng: &mut impl Rng,
    ) -> Option<WeaponDrop> {
        let candidates: Vec<WeaponKind> = DROP_TABLE
            .iter()
            .copied()
            .filter(|weapon| *weapon != equipped)
            .collect();
        let weapon = *candidates.choose(rng)?;
        let position = ring_point(center, self.tuning.drop_radius, self.tuning.drop_height, rng);
        Some(WeaponDrop { position, weapon })
    }
}

/// Uniformly random point on a circle around `center` at a fixed height.
fn ring_point(center: Vec3, radius: f32, height: f32, rng: &mut impl Rng) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    Vec3::new(
        center.x + angle.cos() * radius,
        height,
        center.z + angle.sin() * radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::planar_distance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn director() -> SpawnDirector {
        SpawnDirector::new(SpawnTuning::default())
    }

    #[test]
    fn first_creature_after_two_seconds() {
        let mut director = director();
        let mut rng = StdRng::seed_from_u64(1);

        let batch = director.tick(1.0, Vec3::ZERO, WeaponKind::Sidearm, &mut rng);
        assert!(batch.creature.is_none());
        let batch = director.tick(0.9, Vec3::ZERO, WeaponKind::Sidearm, &mut rng);
        assert!(batch.creature.is_none());
        let batch = director.tick(0.2, Vec3::ZERO, WeaponKind::Sidearm, &mut rng);
        assert!(batch.creature.is_some());
        assert!((director.spawn_interval() - 1.95).abs() < 1e-6);
    }

    #[test]
    fn interval_ramps_down_to_floor() {
        let mut director = director();
        let mut rng = StdRng::seed_from_u64(2);

        for spawned in 1..=31 {
            let batch = director.tick(2.01, Vec3::ZERO, WeaponKind::Sidearm, &mut rng);
            assert!(batch.creature.is_some());
            let expected = (2.0 - spawned as f32 * 0.05).max(0.5);
            assert!((director.spawn_interval() - expected).abs() < 1e-4);
        }
        assert_eq!(director.spawn_interval(), 0.5);

        for _ in 0..300 {
            director.tick(2.01, Vec3::ZERO, WeaponKind::Sidearm, &mut rng);
        }
        assert_eq!(director.spawn_interval(), 0.5);
    }

    #[test]
    fn creatures_spawn_on_ring_around_player() {
        let mut director = director();
        let mut rng = StdRng::seed_from_u64(3);
        let center = Vec3::new(12.0, 0.0, -7.0);

        for _ in 0..50 {
            let creature = director
                .tick(2.5, center, WeaponKind::Sidearm, &mut rng)
                .creature
                .expect("spawn is due");
            assert!((planar_distance(creature.position, center) - 30.0).abs() < 1e-3);
            assert_eq!(creature.position.y, 0.0);
            assert!(matches!(creature.kind, CreatureKind::Standard | CreatureKind::Dog));
        }
    }

    #[test]
    fn creature_mix_is_mostly_standard() {
        let mut director = director();
        let mut rng = StdRng::seed_from_u64(4);
        let mut dogs = 0;
        let total = 2000;

        for _ in 0..total {
            let creature = director
                .tick(2.5, Vec3::ZERO, WeaponKind::Sidearm, &mut rng)
                .creature
                .expect("spawn is due");
            if creature.kind == CreatureKind::Dog {
                dogs += 1;
            }
        }
        let share = dogs as f32 / total as f32;
        assert!((0.18..0.32).contains(&share), "dog share {share}");
    }

    #[test]
    fn drops_never_offer_the_equipped_weapon() {
        let mut director = director();
        let mut rng = StdRng::seed_from_u64(5);

        for equipped in WeaponKind::ALL {
            for _ in 0..30 {
                let drop = director
                    .tick(15.5, Vec3::ZERO, equipped, &mut rng)
                    .drop
                    .expect("drop is due");
                assert_ne!(drop.weapon, equipped);
                assert_ne!(drop.weapon, WeaponKind::Sidearm);
                assert!((planar_distance(drop.position, Vec3::ZERO) - 10.0).abs() < 1e-3);
                assert_eq!(drop.position.y, 1.0);
            }
        }
    }

    #[test]
    fn drop_interval_does_not_ramp() {
        let mut director = director();
        let mut rng = StdRng::seed_from_u64(6);

        assert!(director.tick(15.0, Vec3::ZERO, WeaponKind::Sidearm, &mut rng).drop.is_none());
        assert!(director.tick(0.1, Vec3::ZERO, WeaponKind::Sidearm, &mut rng).drop.is_some());
        assert!(director.tick(14.9, Vec3::ZERO, WeaponKind::Sidearm, &mut rng).drop.is_none());
        assert!(director.tick(0.2, Vec3::ZERO, WeaponKind::Sidearm, &mut rng).drop.is_some());
    }

    #[test]
    fn reset_restores_initial_interval() {
        let mut director = director();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            director.tick(2.5, Vec3::ZERO, WeaponKind::Sidearm, &mut rng);
        }
        director.reset();
        assert_eq!(director.spawn_interval(), 2.0);
        assert!(director.tick(1.5, Vec3::ZERO, WeaponKind::Sidearm, &mut rng).creature.is_none());
    }
}
