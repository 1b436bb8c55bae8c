//! Static scene content: lights, the ship model, and the sky.

pub mod environment;
pub mod ship;

use bevy::prelude::*;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                setup_lights,
                ship::begin_ship_load,
                environment::begin_sky_load,
            ),
        )
        .add_systems(
            Update,
            (ship::poll_ship_load, environment::attach_skybox_when_loaded),
        );
    }
}

/// System to spawn the sun and ambient fill.
///
/// The water material goes through the standard PBR pipeline, so the scene
/// needs real lights even when the sky is absent.
fn setup_lights(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
        ..default()
    });
}
