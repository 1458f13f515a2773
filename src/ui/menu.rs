//! Start screen, game over screen and the keys that move between them.

use bevy::prelude::*;

use crate::core::GameState;
use crate::game::{Simulation, SimulationSet};
use crate::player::CharacterVariant;

/// Marker for start screen entities.
#[derive(Component)]
struct MenuUi;

/// Marker for game over screen entities.
#[derive(Component)]
struct GameOverUi;

/// Set up menu and game over systems.
pub fn setup_menu_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Menu), spawn_menu)
        .add_systems(OnExit(GameState::Menu), despawn_all::<MenuUi>)
        .add_systems(OnEnter(GameState::GameOver), spawn_game_over)
        .add_systems(OnExit(GameState::GameOver), despawn_all::<GameOverUi>)
        .add_systems(
            Update,
            (
                menu_input.run_if(in_state(GameState::Menu)),
                in_game_input.run_if(in_state(GameState::InGame)),
                game_over_input.run_if(in_state(GameState::GameOver)),
            )
                .in_set(SimulationSet::Flow),
        );
}

/// Full-screen column container for a screen.
fn screen_root(background: Color) -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(background),
    )
}

fn label(text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(20.0)),
            ..default()
        },
    )
}

fn spawn_menu(mut commands: Commands, simulation: Res<Simulation>) {
    commands
        .spawn((screen_root(Color::srgb(0.05, 0.05, 0.06)), MenuUi))
        .with_children(|parent| {
            parent.spawn(label("LAST STAND", 80.0, Color::srgb(0.75, 0.2, 0.15)));
            parent.spawn(label(
                format!("High score: {}", simulation.high_score()),
                24.0,
                Color::srgb(0.6, 0.6, 0.6),
            ));
            parent.spawn(label("[1] Play as Max", 28.0, Color::srgb(0.85, 0.85, 0.85)));
            parent.spawn(label("[2] Play as Alex", 28.0, Color::srgb(0.85, 0.85, 0.85)));
            parent.spawn(label(
                "WASD to move, mouse to aim, Space or click to fire",
                18.0,
                Color::srgb(0.5, 0.5, 0.5),
            ));
        });
}

/// Pick a character and start the run.
fn menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut simulation: ResMut<Simulation>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let variant = if keyboard.just_pressed(KeyCode::Digit1) {
        CharacterVariant::Max
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        CharacterVariant::Alex
    } else {
        return;
    };

    simulation.start_run(variant);
    next_state.set(GameState::InGame);
}

/// Escape gives up the current run.
fn in_game_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut simulation: ResMut<Simulation>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) && simulation.end_run().is_some() {
        next_state.set(GameState::GameOver);
    }
}

fn spawn_game_over(mut commands: Commands, simulation: Res<Simulation>) {
    let Some(summary) = simulation.last_summary() else {
        return;
    };

    commands
        .spawn((screen_root(Color::srgba(0.0, 0.0, 0.0, 0.7)), GameOverUi))
        .with_children(|parent| {
            parent.spawn(label("YOU DIED", 64.0, Color::srgb(0.8, 0.15, 0.15)));
            parent.spawn(label(
                format!("Kills: {}", summary.score),
                32.0,
                Color::srgb(0.9, 0.9, 0.9),
            ));
            if summary.new_record {
                parent.spawn(label("New high score!", 28.0, Color::srgb(0.95, 0.8, 0.2)));
            } else {
                parent.spawn(label(
                    format!("High score: {}", summary.high_score),
                    24.0,
                    Color::srgb(0.6, 0.6, 0.6),
                ));
            }
            parent.spawn(label(
                "[Enter] Try again    [R] Menu",
                22.0,
                Color::srgb(0.7, 0.7, 0.7),
            ));
        });
}

/// Restart with the same character or go back to the start screen.
fn game_over_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut simulation: ResMut<Simulation>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        let variant = simulation.player().variant;
        simulation.start_run(variant);
        next_state.set(GameState::InGame);
    } else if keyboard.just_pressed(KeyCode::KeyR) {
        next_state.set(GameState::Menu);
    }
}

fn despawn_all<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
