//! The game loop controller.
//!
//! `Simulation` owns every piece of run state and advances it one step at a
//! time. It never touches the engine: the game plugin feeds it a delta and an
//! input snapshot each frame and forwards the buffered `SimEvent`s.
//!
//! Step order:
//! 1. advance the clock
//! 2. move and turn the player
//! 3. spawn creatures and drops that are due
//! 4. advance creatures; any touching the player ends the run
//! 5. collect pickups
//! 6. fire the equipped weapon
//! 7. advance projectiles and resolve hits, explosions and expiry

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::combat::{CombatResolver, FireOutcome};
use crate::core::{GameConfig, InputSnapshot, SimClock, SimEvent};
use crate::enemies::SpawnDirector;
use crate::player::{resolve_facing, resolve_movement, CharacterVariant, Player};
use crate::score::{HighScoreStore, RunSummary, ScoreTracker};
use crate::world::{EntityRegistry, ObstacleField};

/// What a call to [`Simulation::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No run in progress; nothing changed.
    Idle,
    Running,
    /// A creature reached the player this step and the run is over.
    GameOver(RunSummary),
}

/// Complete state of the game core.
#[derive(Resource)]
pub struct Simulation {
    config: GameConfig,
    clock: SimClock,
    player: Player,
    director: SpawnDirector,
    registry: EntityRegistry,
    score: ScoreTracker,
    resolver: CombatResolver,
    rng: StdRng,
    events: Vec<SimEvent>,
    running: bool,
    last_summary: Option<RunSummary>,
}

impl Simulation {
    /// Build an idle simulation; the RNG follows `config.seed` when set.
    pub fn new(config: GameConfig, store: Box<dyn HighScoreStore>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, store, rng)
    }

    /// Build an idle simulation with a fixed RNG seed.
    pub fn with_seed(config: GameConfig, store: Box<dyn HighScoreStore>, seed: u64) -> Self {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, store: Box<dyn HighScoreStore>, rng: StdRng) -> Self {
        Self {
            clock: SimClock::default(),
            player: Player::new(CharacterVariant::default(), &config.player),
            director: SpawnDirector::new(config.spawning.clone()),
            registry: EntityRegistry::default(),
            score: ScoreTracker::new(store),
            resolver: CombatResolver::new(config.combat.clone()),
            rng,
            events: Vec::new(),
            running: false,
            last_summary: None,
            config,
        }
    }

    /// Reset all run state and begin stepping.
    pub fn start_run(&mut self, variant: CharacterVariant) {
        self.clock.reset();
        self.player = Player::new(variant, &self.config.player);
        self.director.reset();
        self.registry.clear();
        self.score.start_run();
        self.running = true;

        info!(
            "Run started as {} (high score {})",
            variant,
            self.score.high_score()
        );
        self.events.push(SimEvent::RunStarted {
            variant,
            high_score: self.score.high_score(),
        });
    }

    /// Stop stepping and flush the high score.
    ///
    /// Returns `None` when no run was in progress. Live entities are kept so
    /// the final scene can still be drawn; the next run clears them.
    pub fn end_run(&mut self) -> Option<RunSummary> {
        if !self.running {
            return None;
        }
        self.running = false;

        let summary = self.score.finish_run();
        self.last_summary = Some(summary);
        info!(
            "Run ended after {:.1}s with score {} (high score {})",
            self.clock.elapsed(),
            summary.score,
            summary.high_score
        );
        self.events.push(SimEvent::RunEnded {
            score: summary.score,
            high_score: summary.high_score,
            new_record: summary.new_record,
        });
        Some(summary)
    }

    /// Advance the run by `delta` seconds.
    pub fn step(
        &mut self,
        delta: f32,
        input: &InputSnapshot,
        obstacles: &ObstacleField,
    ) -> StepOutcome {
        if !self.running {
            return StepOutcome::Idle;
        }

        let delta = self.clock.advance(delta);
        let now = self.clock.elapsed();

        resolve_movement(&mut self.player, input, obstacles, &self.config.player, delta);
        resolve_facing(&mut self.player, input);

        self.spawn_due(delta);

        let target = self.player.position;
        for creature in &mut self.registry.creatures {
            creature.advance_toward(target, delta);
        }
        if let Some(index) = self.resolver.creature_contact(&self.registry, target) {
            info!("Caught by a {} creature", self.registry.creatures[index].kind);
            return match self.end_run() {
                Some(summary) => StepOutcome::GameOver(summary),
                None => StepOutcome::Idle,
            };
        }

        self.resolver.collect_pickups(
            &mut self.registry,
            target,
            &mut self.player.weapons,
            &mut self.events,
        );

        if input.fire {
            self.fire(now);
        }

        for projectile in &mut self.registry.projectiles {
            projectile.advance(delta);
        }
        self.resolver
            .resolve_projectiles(&mut self.registry, now, &mut self.score, &mut self.events);

        StepOutcome::Running
    }

    fn spawn_due(&mut self, delta: f32) {
        let batch = self.director.tick(
            delta,
            self.player.position,
            self.player.weapons.weapon(),
            &mut self.rng,
        );

        if let Some(creature) = batch.creature {
            debug!("Spawned {} creature at {:?}", creature.kind, creature.position);
            self.events.push(SimEvent::CreatureSpawned {
                kind: creature.kind,
                position: creature.position,
            });
            self.registry.spawn_creature(creature);
        }

        if let Some(drop) = batch.drop {
            debug!("Dropped {} at {:?}", drop.weapon, drop.position);
            self.events.push(SimEvent::DropSpawned {
                weapon: drop.weapon,
                position: drop.position,
            });
            self.registry.spawn_drop(drop);
        }
    }

    fn fire(&mut self, now: f32) {
        let muzzle = self.player.muzzle(&self.config.player, &self.config.combat);
        match self.player.weapons.fire(now, muzzle) {
            FireOutcome::Fired(projectile) => {
                self.events.push(SimEvent::ProjectileFired {
                    weapon: projectile.weapon,
                    position: projectile.position,
                });
                self.registry.spawn_projectile(projectile);
            }
            FireOutcome::CoolingDown => {}
            FireOutcome::Depleted(weapon) => {
                info!("{} is empty, back to {}", weapon, self.player.weapons.weapon());
                self.events.push(SimEvent::WeaponDepleted { weapon });
            }
        }
    }

    /// Take every notification buffered since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn high_score(&self) -> u32 {
        self.score.high_score()
    }

    /// Result of the most recently ended run.
    pub fn last_summary(&self) -> Option<RunSummary> {
        self.last_summary
    }

    pub fn spawn_interval(&self) -> f32 {
        self.director.spawn_interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::WeaponKind;
    use crate::core::{PlayerTuning, SpawnTuning};
    use crate::enemies::{Creature, CreatureKind};
    use crate::score::MemoryHighScoreStore;
    use crate::world::WeaponDrop;

    /// Config with spawning pushed far out so tests control every entity.
    fn quiet_config() -> GameConfig {
        GameConfig {
            spawning: SpawnTuning {
                initial_interval: 1000.0,
                drop_interval: 1000.0,
                ..default()
            },
            high_score_path: None,
            ..default()
        }
    }

    fn running(config: GameConfig) -> Simulation {
        let mut sim = Simulation::with_seed(config, Box::new(MemoryHighScoreStore::default()), 42);
        sim.start_run(CharacterVariant::Max);
        sim.drain_events();
        sim
    }

    fn firing() -> InputSnapshot {
        InputSnapshot {
            fire: true,
            ..default()
        }
    }

    #[test]
    fn idle_until_started() {
        let mut sim = Simulation::with_seed(
            quiet_config(),
            Box::new(MemoryHighScoreStore::default()),
            1,
        );
        assert_eq!(
            sim.step(0.1, &InputSnapshot::default(), &ObstacleField::default()),
            StepOutcome::Idle
        );
        assert_eq!(sim.clock().elapsed(), 0.0);
        assert_eq!(sim.end_run(), None);
    }

    #[test]
    fn still_player_stays_put() {
        let mut sim = running(quiet_config());
        for _ in 0..20 {
            sim.step(0.05, &InputSnapshot::default(), &ObstacleField::default());
        }
        assert_eq!(sim.player().position, Vec3::ZERO);
        assert_eq!(sim.player().facing, Vec3::Z);
    }

    #[test]
    fn single_hit_kills_standard_creature() {
        let mut sim = running(quiet_config());
        sim.registry_mut()
            .spawn_creature(Creature::new(CreatureKind::Standard, Vec3::new(0.0, 0.0, 3.0), 0.0));

        sim.step(0.05, &firing(), &ObstacleField::default());

        assert!(sim.registry().creatures.is_empty());
        assert!(sim.registry().projectiles.is_empty());
        assert_eq!(sim.score(), 1);
        let events = sim.drain_events();
        assert!(events.contains(&SimEvent::ScoreChanged { score: 1 }));
    }

    #[test]
    fn big_creature_takes_five_hits() {
        let mut sim = running(quiet_config());
        sim.registry_mut()
            .spawn_creature(Creature::new(CreatureKind::Big, Vec3::new(0.0, 0.0, 3.0), 0.0));

        let mut hits = 0;
        for _ in 0..200 {
            sim.step(0.05, &firing(), &ObstacleField::default());
            match sim.registry().creatures.first() {
                Some(big) => hits = 5 - big.health,
                None => break,
            }
        }

        assert!(sim.registry().creatures.is_empty());
        assert_eq!(hits, 4);
        assert_eq!(sim.score(), 1);
        // Sidearm gating: five shots need at least two seconds
        assert!(sim.clock().elapsed() >= 2.0);
    }

    #[test]
    fn contact_ends_run_on_that_step() {
        let mut sim = running(quiet_config());
        sim.registry_mut()
            .spawn_creature(Creature::new(CreatureKind::Standard, Vec3::new(1.2, 0.0, 0.0), 3.0));

        let outcome = sim.step(0.1, &InputSnapshot::default(), &ObstacleField::default());

        assert!(matches!(outcome, StepOutcome::GameOver(_)));
        assert!(!sim.is_running());
        let before = sim.clock().elapsed();
        assert_eq!(
            sim.step(0.1, &firing(), &ObstacleField::default()),
            StepOutcome::Idle
        );
        assert_eq!(sim.clock().elapsed(), before);
    }

    #[test]
    fn pickup_equips_weapon() {
        let mut sim = running(quiet_config());
        sim.registry_mut().spawn_drop(WeaponDrop {
            position: Vec3::new(1.0, 1.0, 0.0),
            weapon: WeaponKind::Rifle,
        });

        sim.step(0.05, &InputSnapshot::default(), &ObstacleField::default());

        assert!(sim.registry().drops.is_empty());
        assert_eq!(sim.player().weapons.weapon(), WeaponKind::Rifle);
        assert_eq!(sim.player().weapons.ammo(), Some(30));
        assert!(sim.drain_events().contains(&SimEvent::WeaponEquipped {
            weapon: WeaponKind::Rifle
        }));
    }

    #[test]
    fn empty_weapon_reverts_without_firing() {
        let mut sim = running(quiet_config());
        sim.player_mut().weapons.equip(WeaponKind::Bomb);

        for _ in 0..5 {
            sim.step(1.1, &firing(), &ObstacleField::default());
        }
        assert_eq!(sim.player().weapons.ammo(), Some(0));

        sim.drain_events();
        sim.step(1.1, &firing(), &ObstacleField::default());

        assert_eq!(sim.player().weapons.weapon(), WeaponKind::Sidearm);
        let events = sim.drain_events();
        assert!(events.contains(&SimEvent::WeaponDepleted {
            weapon: WeaponKind::Bomb
        }));
        assert!(!events
            .iter()
            .any(|event| matches!(event, SimEvent::ProjectileFired { .. })));
    }

    #[test]
    fn creature_spawned_this_step_can_be_hit_this_step() {
        // Spawns land 1.2 away, inside blade reach but outside contact
        let mut sim = running(GameConfig {
            player: PlayerTuning {
                muzzle_offset: 0.0,
                ..default()
            },
            spawning: SpawnTuning {
                initial_interval: 0.005,
                creature_radius: 1.2,
                drop_interval: 1000.0,
                ..default()
            },
            high_score_path: None,
            ..default()
        });
        sim.player_mut().weapons.equip(WeaponKind::Blade);

        let outcome = sim.step(0.01, &firing(), &ObstacleField::default());

        assert_eq!(outcome, StepOutcome::Running);
        assert!(sim.registry().creatures.is_empty());
        assert_eq!(sim.score(), 1);
        let events = sim.drain_events();
        assert!(matches!(
            events.first(),
            Some(SimEvent::CreatureSpawned { .. })
        ));
        assert!(events
            .iter()
            .any(|event| matches!(event, SimEvent::CreatureKilled { .. })));
    }

    #[test]
    fn spawned_creatures_are_announced() {
        let mut sim = running(GameConfig {
            high_score_path: None,
            ..default()
        });

        sim.step(2.1, &InputSnapshot::default(), &ObstacleField::default());

        assert_eq!(sim.registry().creatures.len(), 1);
        assert!((sim.spawn_interval() - 1.95).abs() < 1e-6);
        assert!(sim
            .drain_events()
            .iter()
            .any(|event| matches!(event, SimEvent::CreatureSpawned { .. })));
    }
}
