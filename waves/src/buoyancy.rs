//! Orientation of a floating body on the wave field.
//!
//! The hull does not follow the instantaneous wave height. It is pinned to
//! a fixed float line and only its pitch and roll track the surface slope,
//! which reads as plausible rocking without a buoyancy simulation.

use bevy::math::Vec3;

use crate::field::{sample_wave, WaveBand};

/// Vertical line the hull origin is held at, independent of wave height.
pub const FLOAT_HEIGHT: f32 = 0.5;

/// Hard limit on pitch and roll, in radians (about 23 degrees).
pub const MAX_TILT: f32 = 0.4;

/// Position and attitude of the tracked body, mutated in place each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    pub position: Vec3,
    /// Rotation about the world X axis, radians.
    pub pitch: f32,
    /// Rotation about the world Z axis, radians.
    pub roll: f32,
}

impl BodyPose {
    /// A level pose at the given position.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

/// Sample the wave field under `pose` and write back its float-line height
/// and clamped attitude.
///
/// Sign convention: pitch opposes the Z slope, roll follows the X slope.
/// Slopes beyond `max_tilt` are clamped, never wrapped.
pub fn orient_body(
    pose: &mut BodyPose,
    band: &WaveBand,
    time: f32,
    float_height: f32,
    max_tilt: f32,
) {
    let sample = sample_wave(pose.position.x, pose.position.z, time, band);

    pose.position.y = float_height;
    pose.pitch = (-sample.gradient_z).clamp(-max_tilt, max_tilt);
    pose.roll = sample.gradient_x.clamp(-max_tilt, max_tilt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_is_clamped_inclusive() {
        // Amplitude 10 with unit frequency gives a slope of ~10 at the
        // origin, far past the clamp.
        let band = WaveBand::default()
            .with_amplitude(10.0)
            .with_frequency(1.0, 1.0)
            .with_speed(0.0);
        let mut pose = BodyPose::at(Vec3::ZERO);

        orient_body(&mut pose, &band, 0.0, FLOAT_HEIGHT, MAX_TILT);

        assert!(pose.pitch >= -MAX_TILT && pose.pitch <= MAX_TILT);
        assert!(pose.roll >= -MAX_TILT && pose.roll <= MAX_TILT);
        assert_eq!(pose.roll, MAX_TILT, "Steep positive X slope pins the clamp");
        assert_eq!(pose.pitch, -MAX_TILT);
    }

    #[test]
    fn test_body_stays_on_float_line() {
        let band = WaveBand::default().with_amplitude(50.0);
        for t in [0.0, 1.3, 9.9] {
            let mut pose = BodyPose::at(Vec3::new(2.0, -7.0, 3.0));
            orient_body(&mut pose, &band, t, FLOAT_HEIGHT, MAX_TILT);
            assert_eq!(pose.position.y, FLOAT_HEIGHT);
        }
    }

    #[test]
    fn test_sign_convention() {
        // Gentle slope well inside the clamp: at the origin both gradients
        // equal amplitude (cos(0) per axis), so pitch = -slope, roll = +slope.
        let band = WaveBand::default()
            .with_amplitude(0.1)
            .with_frequency(1.0, 1.0)
            .with_speed(0.0);
        let mut pose = BodyPose::at(Vec3::ZERO);

        orient_body(&mut pose, &band, 0.0, FLOAT_HEIGHT, MAX_TILT);

        assert!((pose.roll - 0.1).abs() < 1e-3, "roll follows gradient_x");
        assert!((pose.pitch + 0.1).abs() < 1e-3, "pitch opposes gradient_z");
    }

    #[test]
    fn test_level_water_gives_level_body() {
        let band = WaveBand::default().with_amplitude(0.0);
        let mut pose = BodyPose::at(Vec3::new(1.0, 2.0, 3.0));
        pose.pitch = 0.3;
        pose.roll = -0.2;

        orient_body(&mut pose, &band, 5.0, FLOAT_HEIGHT, MAX_TILT);

        assert_eq!(pose.pitch, 0.0);
        assert_eq!(pose.roll, 0.0);
        // Horizontal position is read, never written.
        assert_eq!(pose.position.x, 1.0);
        assert_eq!(pose.position.z, 3.0);
    }
}
