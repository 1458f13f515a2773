//! Normalized per-step input read by the simulation.

use bevy::prelude::*;

/// Immutable snapshot of player intent for one step.
///
/// Filled by the input adapter in the player module; the core never looks
/// at raw devices.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Ground-plane movement intent (`x` → world X, `y` → world Z), magnitude ≤ 1.
    pub movement: Vec2,
    /// World-space point the player is aiming at.
    pub aim_point: Option<Vec3>,
    /// Fire button held this step.
    pub fire: bool,
}

impl InputSnapshot {
    /// Movement intent as a world-space vector with the length clamped to 1.
    pub fn movement_world(&self) -> Vec3 {
        Vec3::new(self.movement.x, 0.0, self.movement.y).clamp_length_max(1.0)
    }
}
