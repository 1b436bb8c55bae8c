//! Per-frame ship orientation on the wave field.

use bevy::prelude::*;

use waves::{orient_body, BodyPose, FLOAT_HEIGHT, MAX_TILT};

use crate::scene::ship::ShipHull;

use super::{OceanSettings, WaterTime};

/// System to rock the ship on the big-wave band.
///
/// The hull is registered by the ship loader at an arbitrary later frame;
/// until then the query is empty and this is a steady no-op.
pub fn ship_buoyancy_system(
    water_time: Res<WaterTime>,
    settings: Res<OceanSettings>,
    mut ships: Query<&mut Transform, With<ShipHull>>,
) {
    let Ok(mut transform) = ships.single_mut() else {
        return;
    };

    let mut pose = BodyPose::at(transform.translation);
    orient_body(
        &mut pose,
        &settings.big_wave,
        water_time.elapsed,
        FLOAT_HEIGHT,
        MAX_TILT,
    );

    transform.translation = pose.position;
    transform.rotation = Quat::from_euler(EulerRot::XYZ, pose.pitch, 0.0, pose.roll);
}
