//! Damped orbit camera around the scene origin.

use bevy::{
    input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
    pbr::{DistanceFog, FogFalloff},
    prelude::*,
};

const ROTATE_SENSITIVITY: f32 = 0.005;
const ZOOM_LINE_STEP: f32 = 0.15;
const ZOOM_PIXEL_STEP: f32 = 0.002;
/// Keep the camera off the poles so look_at never degenerates.
const PITCH_LIMIT: f32 = 1.5;
const RADIUS_RANGE: (f32, f32) = (0.3, 30.0);
/// Exponential damping rate toward the input targets, 1/s.
const SMOOTHING: f32 = 10.0;

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (orbit_camera_input, orbit_camera_motion).chain());
    }
}

/// Spherical-coordinate state of the orbit camera. The `target_*` fields
/// move instantly with input; the rest ease toward them.
#[derive(Component)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    target_yaw: f32,
    target_pitch: f32,
    target_radius: f32,
}

impl OrbitCamera {
    fn looking_from(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length();
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / radius).asin();
        Self {
            focus,
            yaw,
            pitch,
            radius,
            target_yaw: yaw,
            target_pitch: pitch,
            target_radius: radius,
        }
    }

    fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus
            + self.radius * Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }
}

/// System to spawn the camera with fog, matching the reference viewpoint.
fn setup_camera(mut commands: Commands) {
    let position = Vec3::new(1.0, 1.0, 1.0);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: Color::srgb(0.8, 0.8, 0.8),
            falloff: FogFalloff::Linear {
                start: 10.0,
                end: 15.0,
            },
            ..default()
        },
        OrbitCamera::looking_from(position, Vec3::ZERO),
    ));
}

/// System to fold mouse input into the orbit targets.
fn orbit_camera_input(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    let Ok(mut orbit) = cameras.single_mut() else {
        return;
    };

    if buttons.pressed(MouseButton::Left) {
        for event in motion.read() {
            orbit.target_yaw -= event.delta.x * ROTATE_SENSITIVITY;
            orbit.target_pitch = (orbit.target_pitch + event.delta.y * ROTATE_SENSITIVITY)
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    } else {
        motion.clear();
    }

    for event in wheel.read() {
        let step = match event.unit {
            MouseScrollUnit::Line => event.y * ZOOM_LINE_STEP,
            MouseScrollUnit::Pixel => event.y * ZOOM_PIXEL_STEP,
        };
        orbit.target_radius =
            (orbit.target_radius * (1.0 - step)).clamp(RADIUS_RANGE.0, RADIUS_RANGE.1);
    }
}

/// System to ease the camera toward its targets and write the transform.
fn orbit_camera_motion(
    time: Res<Time>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let Ok((mut orbit, mut transform)) = cameras.single_mut() else {
        return;
    };

    let blend = 1.0 - (-SMOOTHING * time.delta_secs()).exp();
    orbit.yaw += (orbit.target_yaw - orbit.yaw) * blend;
    orbit.pitch += (orbit.target_pitch - orbit.pitch) * blend;
    orbit.radius += (orbit.target_radius - orbit.radius) * blend;

    let focus = orbit.focus;
    *transform = Transform::from_translation(orbit.eye()).looking_at(focus, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looking_from_recovers_position() {
        let position = Vec3::new(1.0, 1.0, 1.0);
        let orbit = OrbitCamera::looking_from(position, Vec3::ZERO);
        assert!((orbit.eye() - position).length() < 1e-5);
    }

    #[test]
    fn test_eye_stays_on_radius() {
        let mut orbit = OrbitCamera::looking_from(Vec3::new(3.0, 2.0, -1.0), Vec3::ZERO);
        orbit.yaw = 2.1;
        orbit.pitch = -0.7;
        assert!((orbit.eye().length() - orbit.radius).abs() < 1e-4);
    }
}
