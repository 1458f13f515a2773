//! Game plugin - owns the simulation resource and steps it from Bevy's clock.

use bevy::prelude::*;

use super::simulation::{Simulation, StepOutcome};
use crate::core::{GameConfig, GameState, InputSnapshot, SimEvent};
use crate::score::{HighScoreStore, MemoryHighScoreStore, RonHighScoreStore};
use crate::world::ObstacleField;

/// Ordering for systems that mutate or publish simulation state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Run lifecycle requests (start, restart, quit).
    Flow,
    Step,
    /// Buffered notifications become Bevy events.
    Publish,
}

/// Game plugin - builds the simulation and advances it once per frame while in game.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // The start screen reads the high score on the very first frame
        let config = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        app.insert_resource(build_simulation(config));

        app.configure_sets(
            Update,
            (SimulationSet::Flow, SimulationSet::Step, SimulationSet::Publish).chain(),
        )
        .add_systems(
            Update,
            (
                advance_simulation
                    .in_set(SimulationSet::Step)
                    .run_if(in_state(GameState::InGame)),
                publish_events.in_set(SimulationSet::Publish),
            ),
        );
    }
}

/// Build the simulation with the configured high score store.
fn build_simulation(config: GameConfig) -> Simulation {
    let store: Box<dyn HighScoreStore> = match &config.high_score_path {
        Some(path) => {
            info!("High scores persist to {}", path);
            Box::new(RonHighScoreStore::new(path))
        }
        None => {
            warn!("No high score path configured, scores last for this session only");
            Box::new(MemoryHighScoreStore::default())
        }
    };

    Simulation::new(config, store)
}

/// Step the simulation by the frame delta.
fn advance_simulation(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    obstacles: Res<ObstacleField>,
    mut simulation: ResMut<Simulation>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if let StepOutcome::GameOver(summary) = simulation.step(time.delta_secs(), &input, &obstacles) {
        debug!("Game over with {:?}", summary);
        next_state.set(GameState::GameOver);
    }
}

/// Drain buffered notifications into the event queue.
fn publish_events(mut simulation: ResMut<Simulation>, mut events: EventWriter<SimEvent>) {
    let drained = simulation.drain_events();
    if !drained.is_empty() {
        events.send_batch(drained);
    }
}
