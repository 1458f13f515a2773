//! Core plugin that sets up game states, events, and configuration.

use bevy::prelude::*;

use super::config::GameConfig;
use super::events::SimEvent;
use super::input::InputSnapshot;
use super::states::GameState;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Menu, InGame, GameOver)
/// - Simulation notifications (SimEvent)
/// - Gameplay configuration and the shared input snapshot
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Keep a config inserted by the embedding app (tests, tools)
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::load());
        }

        app.init_state::<GameState>()
            .add_event::<SimEvent>()
            .init_resource::<InputSnapshot>();
    }
}
