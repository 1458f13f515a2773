//! Static obstacles and the player's collision test against them.

use bevy::math::bounding::{Aabb3d, IntersectsVolume};
use bevy::prelude::*;

/// A static axis-aligned box that blocks the player.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub bounds: Aabb3d,
}

// `Aabb3d` does not implement `PartialEq`; compare its fields directly.
impl PartialEq for Obstacle {
    fn eq(&self, other: &Self) -> bool {
        self.bounds.min == other.bounds.min && self.bounds.max == other.bounds.max
    }
}

impl Obstacle {
    pub fn from_center_half_size(center: Vec3, half_size: Vec3) -> Self {
        Self {
            bounds: Aabb3d::new(center, half_size),
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from((self.bounds.min + self.bounds.max) * 0.5)
    }

    pub fn half_size(&self) -> Vec3 {
        Vec3::from((self.bounds.max - self.bounds.min) * 0.5)
    }
}

/// Every obstacle in the level, built once at startup.
///
/// An empty field is a valid degenerate level and blocks nothing.
#[derive(Resource, Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Whether `volume` touches or overlaps any obstacle.
    pub fn intersects(&self, volume: &Aabb3d) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| obstacle.bounds.intersects(volume))
    }
}

/// Squared distance on the ground plane, ignoring height.
pub fn planar_distance_squared(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    dx * dx + dz * dz
}

/// Distance on the ground plane, ignoring height.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    planar_distance_squared(a, b).sqrt()
}
