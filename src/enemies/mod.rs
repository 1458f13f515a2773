//! Enemies module - creature types, pursuit and spawning.

mod components;
pub mod data;
mod spawning;

pub use components::Creature;
pub use data::{CreatureKind, CreatureStats};
pub use spawning::{SpawnBatch, SpawnDirector};
