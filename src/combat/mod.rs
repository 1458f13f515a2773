//! Combat module - weapons, projectiles, and hit resolution.

mod projectile;
mod resolver;
mod weapons;

pub use projectile::{Projectile, ProjectileFlags};
pub use resolver::CombatResolver;
pub use weapons::{FireOutcome, Muzzle, WeaponKind, WeaponStateMachine, WeaponStats};
