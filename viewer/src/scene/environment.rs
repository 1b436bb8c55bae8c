//! Sky background loading.
//!
//! Same fire-and-forget pattern as the ship: the skybox image loads in the
//! background and is attached to the camera when ready. Until then (or if
//! the file is absent) the scene renders against the clear color.

use bevy::{asset::LoadState, core_pipeline::Skybox, prelude::*};

/// Asset path of the sky cubemap, relative to the data folder.
/// Expects a prepared ktx2 cubemap, not a raw equirectangular image.
pub const SKYBOX_PATH: &str = "environment/industrial_sunset_puresky.ktx2";

/// Resource holding the in-flight sky load. Removed once resolved.
#[derive(Resource)]
pub struct PendingSky {
    handle: Handle<Image>,
}

/// System to kick off the sky load at startup.
pub fn begin_sky_load(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load(SKYBOX_PATH);
    commands.insert_resource(PendingSky { handle });
}

/// System to attach the skybox to the camera once loaded.
pub fn attach_skybox_when_loaded(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    pending: Option<Res<PendingSky>>,
    camera: Query<Entity, With<Camera3d>>,
) {
    let Some(pending) = pending else {
        return;
    };

    match asset_server.load_state(&pending.handle) {
        LoadState::Loaded => {
            let Ok(camera) = camera.single() else {
                // Camera not spawned yet; try again next frame.
                return;
            };
            commands.entity(camera).insert(Skybox {
                image: pending.handle.clone(),
                brightness: 1000.0,
                rotation: Quat::IDENTITY,
            });
            info!("Sky environment ready");
            commands.remove_resource::<PendingSky>();
        }
        LoadState::Failed(_) => {
            warn!("Sky environment unavailable ({SKYBOX_PATH}), using clear color");
            commands.remove_resource::<PendingSky>();
        }
        _ => {}
    }
}
