//! Player module - survivor state, movement resolution and device input.

mod camera;
mod components;
mod controls;
mod movement;
mod plugin;

pub use camera::PlayerCamera;
pub use components::{CharacterVariant, Player};
pub use movement::{resolve_facing, resolve_movement};
pub use plugin::PlayerPlugin;
