//! In-game HUD - score, high score and weapon readout.

use bevy::prelude::*;

use crate::core::GameState;
use crate::game::{Simulation, SimulationSet};

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the kill counter text.
#[derive(Component)]
pub struct ScoreText;

/// Marker for the weapon and ammo text.
#[derive(Component)]
pub struct WeaponText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_score_text, update_weapon_text)
                .after(SimulationSet::Step)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Top-left readout
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_line(parent, 28.0, Color::srgb(0.95, 0.95, 0.95), ScoreText);
            spawn_line(parent, 20.0, Color::srgb(0.95, 0.8, 0.3), WeaponText);
        });
}

/// Helper to spawn one line of HUD text.
fn spawn_line<M: Component>(parent: &mut ChildBuilder, size: f32, color: Color, marker: M) {
    parent.spawn((
        Text::new(""),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(6.0)),
            ..default()
        },
        marker,
    ));
}

/// Despawn HUD when leaving gameplay.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

fn update_score_text(simulation: Res<Simulation>, mut query: Query<&mut Text, With<ScoreText>>) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    text.0 = format!(
        "Kills: {}   Best: {}",
        simulation.score(),
        simulation.high_score().max(simulation.score())
    );
}

fn update_weapon_text(simulation: Res<Simulation>, mut query: Query<&mut Text, With<WeaponText>>) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    let weapons = &simulation.player().weapons;
    text.0 = match weapons.ammo() {
        Some(ammo) => format!("{}  {}", weapons.weapon(), ammo),
        None => format!("{}  \u{221e}", weapons.weapon()),
    };
}
