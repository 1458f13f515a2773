//! Core game module - states, events, clock, input and configuration.
//!
//! This module provides the foundation that all other game systems build upon.

mod clock;
mod config;
mod error;
mod events;
mod input;
mod plugin;
mod states;

pub use clock::SimClock;
pub use config::*;
pub use error::DataLoadError;
pub use events::SimEvent;
pub use input::InputSnapshot;
pub use plugin::CorePlugin;
pub use states::GameState;
