//! Projectiles fired by the player's weapons.

use bevy::prelude::*;

use super::weapons::{WeaponKind, WeaponStats};

/// Behaviour switches for a projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectileFlags {
    /// Survives hits and uses the wider melee hit radius.
    pub melee: bool,
    /// Explodes on first contact or on expiry.
    pub bomb: bool,
}

/// A live projectile.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec3,
    /// Unit direction of travel.
    pub direction: Vec3,
    pub speed: f32,
    pub damage: i32,
    pub flags: ProjectileFlags,
    pub weapon: WeaponKind,
    /// Absolute clock time after which the projectile is removed.
    pub expires_at: f32,
}

impl Projectile {
    pub fn new(
        position: Vec3,
        direction: Vec3,
        weapon: WeaponKind,
        stats: WeaponStats,
        expires_at: f32,
    ) -> Self {
        Self {
            position,
            direction: direction.normalize_or_zero(),
            speed: stats.projectile_speed,
            damage: stats.damage,
            flags: stats.flags,
            weapon,
            expires_at,
        }
    }

    /// Move along the fixed direction.
    pub fn advance(&mut self, delta: f32) {
        self.position += self.direction * self.speed * delta;
    }

    pub fn is_expired(&self, now: f32) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travels_along_direction_at_speed() {
        let mut projectile = Projectile::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 2.0),
            WeaponKind::Sidearm,
            WeaponKind::Sidearm.stats(),
            0.8,
        );
        projectile.advance(0.5);
        assert_eq!(projectile.position, Vec3::new(0.0, 0.0, 20.0));
    }

    #[test]
    fn zero_direction_stays_put() {
        let mut projectile = Projectile::new(
            Vec3::ONE,
            Vec3::ZERO,
            WeaponKind::Rifle,
            WeaponKind::Rifle.stats(),
            0.8,
        );
        projectile.advance(1.0);
        assert_eq!(projectile.position, Vec3::ONE);
    }
}
