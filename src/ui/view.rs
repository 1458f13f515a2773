//! Gizmo rendering of the simulation's live entities.

use bevy::prelude::*;

use crate::combat::WeaponKind;
use crate::core::{GameState, SimClock, SimEvent};
use crate::enemies::CreatureKind;
use crate::game::{Simulation, SimulationSet};
use crate::player::CharacterVariant;

/// How long an explosion stays on screen, in simulation seconds.
const FLASH_DURATION: f32 = 0.2;

/// Explosions still being drawn, each with an absolute deadline on the sim clock.
#[derive(Resource, Default, Debug)]
pub struct ExplosionFlashes {
    flashes: Vec<Flash>,
}

#[derive(Debug, Clone, Copy)]
struct Flash {
    position: Vec3,
    radius: f32,
    expires_at: f32,
}

impl ExplosionFlashes {
    pub fn push(&mut self, position: Vec3, radius: f32, now: f32) {
        self.flashes.push(Flash {
            position,
            radius,
            expires_at: now + FLASH_DURATION,
        });
    }

    /// Forget every flash whose deadline has passed on `clock`.
    pub fn expire(&mut self, clock: &SimClock) {
        self.flashes.retain(|flash| !clock.has_passed(flash.expires_at));
    }

    pub fn clear(&mut self) {
        self.flashes.clear();
    }

    pub fn len(&self) -> usize {
        self.flashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashes.is_empty()
    }
}

/// Set up entity drawing.
pub fn setup_view_systems(app: &mut App) {
    app.init_resource::<ExplosionFlashes>()
        .add_systems(Update, track_explosions.after(SimulationSet::Publish))
        .add_systems(
            Update,
            draw_entities
                .after(track_explosions)
                .run_if(not(in_state(GameState::Menu))),
        );
}

/// Start flashes for new explosions and drop expired ones.
fn track_explosions(
    mut events: EventReader<SimEvent>,
    simulation: Res<Simulation>,
    mut flashes: ResMut<ExplosionFlashes>,
) {
    let now = simulation.clock().elapsed();
    for event in events.read() {
        match event {
            SimEvent::Explosion { position, .. } => {
                flashes.push(*position, simulation.config().combat.explosion_radius, now);
            }
            SimEvent::RunStarted { .. } => flashes.clear(),
            _ => {}
        }
    }
    flashes.expire(simulation.clock());
}

fn draw_entities(simulation: Res<Simulation>, flashes: Res<ExplosionFlashes>, mut gizmos: Gizmos) {
    let player = simulation.player();
    let body = match player.variant {
        CharacterVariant::Max => Color::srgb(0.2, 0.45, 0.9),
        CharacterVariant::Alex => Color::srgb(0.85, 0.35, 0.7),
    };
    let center = player.position + Vec3::Y;
    gizmos.cuboid(
        Transform::from_translation(center).with_scale(Vec3::new(0.6, 2.0, 0.6)),
        body,
    );
    gizmos.arrow(center, center + player.facing * 1.5, Color::WHITE);

    for creature in &simulation.registry().creatures {
        let (radius, color) = match creature.kind {
            CreatureKind::Standard => (0.5, Color::srgb(0.35, 0.6, 0.3)),
            CreatureKind::Dog => (0.4, Color::srgb(0.5, 0.35, 0.2)),
            CreatureKind::Crawler => (0.35, Color::srgb(0.45, 0.5, 0.3)),
            CreatureKind::Big => (0.9, Color::srgb(0.3, 0.45, 0.25)),
        };
        gizmos.sphere(
            Isometry3d::from_translation(creature.position + Vec3::Y * radius),
            radius,
            color,
        );
    }

    for projectile in &simulation.registry().projectiles {
        let (radius, color) = match projectile.weapon {
            WeaponKind::Sidearm | WeaponKind::Rifle => (0.1, Color::srgb(1.0, 0.9, 0.4)),
            WeaponKind::Bomb => (0.3, Color::srgb(0.2, 0.2, 0.2)),
            WeaponKind::Blade => (0.6, Color::srgb(0.8, 0.9, 1.0)),
        };
        gizmos.sphere(
            Isometry3d::from_translation(projectile.position),
            radius,
            color,
        );
    }

    let ground = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
    for drop in &simulation.registry().drops {
        gizmos.cuboid(
            Transform::from_translation(drop.position).with_scale(Vec3::splat(0.6)),
            Color::srgb(0.95, 0.8, 0.2),
        );
        gizmos.circle(
            Isometry3d::new(drop.position.with_y(0.05), ground),
            simulation.config().combat.pickup_radius,
            Color::srgba(0.95, 0.8, 0.2, 0.4),
        );
    }

    for flash in &flashes.flashes {
        gizmos.circle(
            Isometry3d::new(flash.position.with_y(0.1), ground),
            flash.radius,
            Color::srgb(1.0, 0.5, 0.1),
        );
        gizmos.sphere(
            Isometry3d::from_translation(flash.position),
            flash.radius * 0.5,
            Color::srgb(1.0, 0.8, 0.3),
        );
    }
}
