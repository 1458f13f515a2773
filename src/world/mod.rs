//! World module - obstacle layout and the live entity collections.

mod generation;
mod obstacles;
mod plugin;
mod registry;

pub use generation::generate_obstacle_field;
pub use obstacles::{planar_distance, planar_distance_squared, Obstacle, ObstacleField};
pub use plugin::{LevelGeometry, WorldPlugin};
pub use registry::{EntityRegistry, WeaponDrop};
