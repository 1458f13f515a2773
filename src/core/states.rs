//! Game state definitions that control the overall flow of the game.
//!
//! The simulation only steps while in `InGame`. Menus and the game over
//! screen live in the UI module and drive transitions between states.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Menu` where the player picks a character
/// - Enter `InGame` when a run starts
/// - `GameOver` when a creature reaches the player or the run is abandoned
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Character select / title screen
    #[default]
    Menu,
    /// Active run
    InGame,
    /// Run has ended, final score shown
    GameOver,
}
