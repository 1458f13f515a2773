//! Game module - the simulation core and the systems that drive it.

mod plugin;
mod simulation;

pub use plugin::{GamePlugin, SimulationSet};
pub use simulation::{Simulation, StepOutcome};
