//! Weapon table and the player's weapon state machine.

use bevy::prelude::*;
use std::fmt;

use super::projectile::{Projectile, ProjectileFlags};

/// Every weapon the player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeaponKind {
    /// Unlimited sidearm, the fallback when anything else runs dry.
    #[default]
    Sidearm,
    Rifle,
    Bomb,
    Blade,
}

/// Fixed parameters of a weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    /// Minimum seconds between shots.
    pub fire_rate: f32,
    /// Rounds on equip; `None` is unlimited.
    pub ammo: Option<u32>,
    pub damage: i32,
    pub projectile_speed: f32,
    pub flags: ProjectileFlags,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Sidearm,
        WeaponKind::Rifle,
        WeaponKind::Bomb,
        WeaponKind::Blade,
    ];

    /// Lookup table of weapon parameters.
    pub fn stats(self) -> WeaponStats {
        match self {
            WeaponKind::Sidearm => WeaponStats {
                fire_rate: 0.5,
                ammo: None,
                damage: 1,
                projectile_speed: 40.0,
                flags: ProjectileFlags::default(),
            },
            WeaponKind::Rifle => WeaponStats {
                fire_rate: 0.1,
                ammo: Some(30),
                damage: 1,
                projectile_speed: 60.0,
                flags: ProjectileFlags::default(),
            },
            WeaponKind::Bomb => WeaponStats {
                fire_rate: 1.0,
                ammo: Some(5),
                damage: 1,
                projectile_speed: 15.0,
                flags: ProjectileFlags {
                    bomb: true,
                    ..default()
                },
            },
            // Ammo is blade durability.
            WeaponKind::Blade => WeaponStats {
                fire_rate: 0.4,
                ammo: Some(50),
                damage: 1,
                projectile_speed: 20.0,
                flags: ProjectileFlags {
                    melee: true,
                    ..default()
                },
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Sidearm => "Pistol",
            WeaponKind::Rifle => "Rifle",
            WeaponKind::Bomb => "Bomb",
            WeaponKind::Blade => "Katana",
        }
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where and how a projectile leaves the weapon.
#[derive(Debug, Clone, Copy)]
pub struct Muzzle {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Lifetime of ranged and bomb projectiles.
    pub lifetime: f32,
    /// Lifetime of a blade swing.
    pub melee_lifetime: f32,
}

/// Result of pulling the trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum FireOutcome {
    Fired(Projectile),
    /// Still inside the fire-rate window.
    CoolingDown,
    /// Weapon was empty; the sidearm is now equipped and the press is eaten.
    Depleted(WeaponKind),
}

/// Current weapon, remaining ammo and fire-rate gate.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponStateMachine {
    weapon: WeaponKind,
    ammo: Option<u32>,
    fire_rate: f32,
    last_fire_time: Option<f32>,
}

impl Default for WeaponStateMachine {
    fn default() -> Self {
        let mut machine = Self {
            weapon: WeaponKind::Sidearm,
            ammo: None,
            fire_rate: 0.0,
            last_fire_time: None,
        };
        machine.equip(WeaponKind::Sidearm);
        machine
    }
}

impl WeaponStateMachine {
    pub fn weapon(&self) -> WeaponKind {
        self.weapon
    }

    /// Remaining rounds, `None` for unlimited.
    pub fn ammo(&self) -> Option<u32> {
        self.ammo
    }

    pub fn fire_rate(&self) -> f32 {
        self.fire_rate
    }

    /// Replace the weapon and its ammo from the table. Ammo never carries over.
    pub fn equip(&mut self, weapon: WeaponKind) {
        let stats = weapon.stats();
        self.weapon = weapon;
        self.fire_rate = stats.fire_rate;
        self.ammo = stats.ammo;
    }

    /// Try to fire at `now`.
    pub fn fire(&mut self, now: f32, muzzle: Muzzle) -> FireOutcome {
        if let Some(last) = self.last_fire_time {
            if now - last < self.fire_rate {
                return FireOutcome::CoolingDown;
            }
        }

        if self.weapon != WeaponKind::Sidearm && self.ammo.unwrap_or(0) == 0 {
            let depleted = self.weapon;
            self.equip(WeaponKind::Sidearm);
            return FireOutcome::Depleted(depleted);
        }

        self.last_fire_time = Some(now);
        if let Some(ammo) = self.ammo.as_mut() {
            *ammo = ammo.saturating_sub(1);
        }

        let stats = self.weapon.stats();
        let lifetime = if stats.flags.melee {
            muzzle.melee_lifetime
        } else {
            muzzle.lifetime
        };

        FireOutcome::Fired(Projectile::new(
            muzzle.origin,
            muzzle.direction,
            self.weapon,
            stats,
            now + lifetime,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn muzzle() -> Muzzle {
        Muzzle {
            origin: Vec3::new(0.0, 1.4, 0.8),
            direction: Vec3::Z,
            lifetime: 0.8,
            melee_lifetime: 0.2,
        }
    }

    fn fired(outcome: FireOutcome) -> Projectile {
        match outcome {
            FireOutcome::Fired(projectile) => projectile,
            other => panic!("expected a projectile, got {other:?}"),
        }
    }

    #[test]
    fn starts_with_unlimited_sidearm() {
        let machine = WeaponStateMachine::default();
        assert_eq!(machine.weapon(), WeaponKind::Sidearm);
        assert_eq!(machine.ammo(), None);
        assert_eq!(machine.fire_rate(), 0.5);
    }

    #[test]
    fn fire_rate_gates_consecutive_shots() {
        let mut machine = WeaponStateMachine::default();
        fired(machine.fire(1.0, muzzle()));
        assert_eq!(machine.fire(1.3, muzzle()), FireOutcome::CoolingDown);
        fired(machine.fire(1.5, muzzle()));
    }

    #[test]
    fn sidearm_never_runs_out() {
        let mut machine = WeaponStateMachine::default();
        for shot in 0..200 {
            fired(machine.fire(shot as f32, muzzle()));
        }
        assert_eq!(machine.ammo(), None);
        assert_eq!(machine.weapon(), WeaponKind::Sidearm);
    }

    #[test]
    fn equip_overwrites_ammo_without_stacking() {
        let mut machine = WeaponStateMachine::default();
        machine.equip(WeaponKind::Rifle);
        fired(machine.fire(1.0, muzzle()));
        assert_eq!(machine.ammo(), Some(29));

        machine.equip(WeaponKind::Rifle);
        assert_eq!(machine.ammo(), Some(30));

        machine.equip(WeaponKind::Bomb);
        assert_eq!(machine.ammo(), Some(5));
        assert_eq!(machine.fire_rate(), 1.0);
    }

    #[test]
    fn rifle_reverts_to_sidearm_after_thirty_shots() {
        let mut machine = WeaponStateMachine::default();
        machine.equip(WeaponKind::Rifle);

        let mut now = 0.0;
        for _ in 0..30 {
            now += 0.15;
            fired(machine.fire(now, muzzle()));
        }
        assert_eq!(machine.ammo(), Some(0));

        assert_eq!(
            machine.fire(now + 5.0, muzzle()),
            FireOutcome::Depleted(WeaponKind::Rifle)
        );
        assert_eq!(machine.weapon(), WeaponKind::Sidearm);
        assert_eq!(machine.ammo(), None);
    }

    #[test]
    fn projectile_carries_table_parameters() {
        let mut machine = WeaponStateMachine::default();
        machine.equip(WeaponKind::Bomb);
        let bomb = fired(machine.fire(2.0, muzzle()));
        assert!(bomb.flags.bomb);
        assert!(!bomb.flags.melee);
        assert_eq!(bomb.speed, 15.0);
        assert!((bomb.expires_at - 2.8).abs() < 1e-6);

        machine.equip(WeaponKind::Blade);
        let swing = fired(machine.fire(4.0, muzzle()));
        assert!(swing.flags.melee);
        assert_eq!(swing.speed, 20.0);
        assert!((swing.expires_at - 4.2).abs() < 1e-6);
    }

    #[test]
    fn first_shot_is_not_gated() {
        let mut machine = WeaponStateMachine::default();
        fired(machine.fire(0.0, muzzle()));
    }
}
