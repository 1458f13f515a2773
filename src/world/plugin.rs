//! World plugin - level generation and static scenery.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::generation::generate_obstacle_field;
use super::obstacles::ObstacleField;
use crate::core::GameConfig;

/// Marker for static level meshes.
#[derive(Component)]
pub struct LevelGeometry;

/// World plugin - generates the obstacle field once and builds its meshes.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObstacleField>()
            .add_systems(Startup, (generate_level, spawn_level_geometry).chain());
    }
}

/// Generate the obstacle layout from the config seed.
fn generate_level(mut commands: Commands, config: Res<GameConfig>) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let field = generate_obstacle_field(&config.level, &mut rng);
    info!("Generated level with {} obstacles", field.len());
    commands.insert_resource(field);
}

/// Ground plane plus one box per obstacle.
fn spawn_level_geometry(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    field: Res<ObstacleField>,
    config: Res<GameConfig>,
) {
    let ground_size = config.level.city_extent * 2.0 + config.level.grid_spacing * 2.0;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ground_size, ground_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.25, 0.27, 0.25),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
        LevelGeometry,
    ));

    let building = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.43, 0.4),
        perceptual_roughness: 0.9,
        ..default()
    });
    let car = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.15, 0.12),
        perceptual_roughness: 0.5,
        ..default()
    });

    for obstacle in field.obstacles() {
        let size = obstacle.half_size() * 2.0;
        // Anything shorter than a storey is a car
        let material = if size.y < 5.0 { car.clone() } else { building.clone() };

        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(material),
            Transform::from_translation(obstacle.center()),
            LevelGeometry,
        ));
    }
}
