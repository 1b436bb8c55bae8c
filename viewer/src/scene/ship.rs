//! Ship model loading and registration.
//!
//! The GLTF load is fire-and-forget: a poll system watches the handle and
//! spawns the hull exactly once when the scene is ready. Spawning inserts
//! the [`ShipHull`] marker, which is the registration the buoyancy system
//! keys on. A missing asset only costs the feature, never the scene.

use bevy::{asset::LoadState, gltf::GltfAssetLabel, prelude::*};

/// Asset path of the ship scene, relative to the data folder.
pub const SHIP_SCENE_PATH: &str = "models/dutch_ship_large/dutch_ship_large.gltf";

/// Source models are authored in centimeters.
const SHIP_SCALE: f32 = 0.01;

/// Marker component for the single tracked hull.
#[derive(Component)]
pub struct ShipHull;

/// Resource holding the in-flight ship load. Removed once resolved.
#[derive(Resource)]
pub struct PendingShip {
    handle: Handle<Scene>,
}

/// System to kick off the ship load at startup.
pub fn begin_ship_load(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load(GltfAssetLabel::Scene(0).from_asset(SHIP_SCENE_PATH));
    commands.insert_resource(PendingShip { handle });
}

/// System to spawn the hull once its scene has loaded.
pub fn poll_ship_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    pending: Option<Res<PendingShip>>,
) {
    let Some(pending) = pending else {
        return;
    };

    match asset_server.load_state(&pending.handle) {
        LoadState::Loaded => {
            commands.spawn((
                SceneRoot(pending.handle.clone()),
                Transform::from_xyz(0.0, 0.0, 0.0).with_scale(Vec3::splat(SHIP_SCALE)),
                ShipHull,
            ));
            info!("Ship model ready");
            commands.remove_resource::<PendingShip>();
        }
        LoadState::Failed(_) => {
            warn!("Ship model unavailable ({SHIP_SCENE_PATH}), sailing without it");
            commands.remove_resource::<PendingShip>();
        }
        _ => {}
    }
}
