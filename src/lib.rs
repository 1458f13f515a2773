//! Last Stand - a top-down zombie survival game in Bevy.
//!
//! The player holds out in a procedurally generated city block while
//! creatures close in from every side. Kills score points; weapon drops
//! appear periodically; the run ends the moment anything reaches the player.
//!
//! # Architecture
//!
//! The simulation core is plain Rust data stepped by one system per frame,
//! so every rule can be tested without an `App`. Plugins wrap it:
//!
//! - **Core**: Game states, simulation events, clock, input snapshot, configuration
//! - **Player**: Movement and facing resolution, device input, follow camera
//! - **Combat**: Weapon table, fire-rate and ammo, projectile hit resolution
//! - **Enemies**: Creature stats, pursuit, spawn timing
//! - **World**: Obstacle layout and the live entity collections
//! - **Score**: Kill count and high score persistence
//! - **Game**: The `Simulation` resource and the systems that drive it
//! - **UI**: Menus, HUD, gizmo view of entities

pub mod combat;
pub mod core;
pub mod enemies;
pub mod game;
pub mod player;
pub mod score;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct LastStandPlugin;

impl Plugin for LastStandPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Level layout
            .add_plugins(world::WorldPlugin)

            // Simulation driver
            .add_plugins(game::GamePlugin)

            // Input and camera
            .add_plugins(player::PlayerPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
