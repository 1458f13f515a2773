//! Procedural obstacle layout.
//!
//! The level is a square grid of lots. Each lot may hold a building or a
//! parked car; both become axis-aligned obstacles. Lots near the origin are
//! kept clear so the player never starts inside a wall.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use super::obstacles::{Obstacle, ObstacleField};
use crate::core::LevelTuning;

/// Footprint of a car body before rotation.
const CAR_HALF_LENGTH: f32 = 2.0;
const CAR_HALF_WIDTH: f32 = 1.0;
/// Roof top of the car above the ground.
const CAR_HEIGHT: f32 = 2.75;

/// Build the obstacle field for a level.
pub fn generate_obstacle_field(tuning: &LevelTuning, rng: &mut impl Rng) -> ObstacleField {
    let mut obstacles = Vec::new();

    if tuning.grid_spacing <= 0.0 {
        warn!("Grid spacing must be positive, generating an empty level");
        return ObstacleField::default();
    }

    let cells = (tuning.city_extent / tuning.grid_spacing).floor() as i32;
    let clearance_sq = tuning.spawn_clearance * tuning.spawn_clearance;

    for ix in -cells..=cells {
        for iz in -cells..=cells {
            let x = ix as f32 * tuning.grid_spacing;
            let z = iz as f32 * tuning.grid_spacing;

            if x * x + z * z < clearance_sq {
                continue;
            }

            if rng.gen::<f32>() < tuning.building_chance {
                obstacles.push(building(x, z, rng));
            } else if rng.gen::<f32>() < tuning.car_chance {
                obstacles.push(car(x, z, rng));
            }
        }
    }

    ObstacleField::new(obstacles)
}

/// A building resting on the ground, 5-10 wide and deep, 10-25 tall.
fn building(x: f32, z: f32, rng: &mut impl Rng) -> Obstacle {
    let width: f32 = rng.gen_range(5.0..10.0);
    let height: f32 = rng.gen_range(10.0..25.0);
    let depth: f32 = rng.gen_range(5.0..10.0);

    Obstacle::from_center_half_size(
        Vec3::new(x, height / 2.0, z),
        Vec3::new(width / 2.0, height / 2.0, depth / 2.0),
    )
}

/// A car at a random yaw; its box is the bounds of the rotated footprint.
fn car(x: f32, z: f32, rng: &mut impl Rng) -> Obstacle {
    let yaw = rng.gen_range(0.0..PI);
    let (sin, cos) = yaw.sin_cos();
    let half_x = cos.abs() * CAR_HALF_LENGTH + sin.abs() * CAR_HALF_WIDTH;
    let half_z = sin.abs() * CAR_HALF_LENGTH + cos.abs() * CAR_HALF_WIDTH;

    Obstacle::from_center_half_size(
        Vec3::new(x, CAR_HEIGHT / 2.0, z),
        Vec3::new(half_x, CAR_HEIGHT / 2.0, half_z),
    )
}
