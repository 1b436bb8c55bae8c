//! Sinusoidal wave field sampling.
//!
//! This module provides the CPU-side wave height calculation that matches
//! the GPU shader's big-wave band (`data/shaders/ocean.wgsl`). The gradient
//! is estimated with central finite differences rather than the closed-form
//! derivative so that CPU output stays bit-comparable with reference data
//! produced the same way.
//!
//! ## Usage
//!
//! ```rust
//! use waves::field::{sample_wave, WaveBand};
//!
//! let band = WaveBand::default();
//! let sample = sample_wave(10.0, 5.0, 0.5, &band);
//! assert!(sample.height.is_finite());
//! ```

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Step used for the finite-difference gradient estimate.
pub const GRADIENT_STEP: f32 = 0.01;

/// Parameters for a single additive sinusoidal wave band.
///
/// `frequency.x` applies along the world X axis and `frequency.y` along the
/// world Z axis. Negative or zero frequencies and speeds are valid; they
/// flatten or reverse the travelling wave but never fault.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveBand {
    /// Peak elevation contributed by each sine term.
    pub amplitude: f32,
    /// Spatial frequency per horizontal axis (x, z).
    pub frequency: Vec2,
    /// Phase speed shared by both terms.
    pub speed: f32,
}

impl Default for WaveBand {
    fn default() -> Self {
        Self {
            amplitude: 0.25,
            frequency: Vec2::new(4.0, 1.5),
            speed: 0.75,
        }
    }
}

impl WaveBand {
    /// Create a band with a custom amplitude.
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Create a band with custom per-axis frequencies.
    pub fn with_frequency(mut self, fx: f32, fz: f32) -> Self {
        self.frequency = Vec2::new(fx, fz);
        self
    }

    /// Create a band with a custom phase speed.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Surface height at `(x, z)` for the given animation time.
    #[inline]
    pub fn height(&self, x: f32, z: f32, time: f32) -> f32 {
        self.amplitude
            * ((x * self.frequency.x + time * self.speed).sin()
                + (z * self.frequency.y + time * self.speed).sin())
    }
}

/// Height and horizontal slope of the wave field at one point.
///
/// Recomputed on every call; nothing is cached between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    /// Surface elevation above the nominal water plane.
    pub height: f32,
    /// Finite-difference slope along the world X axis.
    pub gradient_x: f32,
    /// Finite-difference slope along the world Z axis.
    pub gradient_z: f32,
}

/// Sample the wave field at a horizontal position.
///
/// Pure function of its arguments: no hidden state, safe to call from any
/// number of readers. Non-finite inputs propagate into the output rather
/// than faulting.
pub fn sample_wave(x: f32, z: f32, time: f32, band: &WaveBand) -> WaveSample {
    let height = band.height(x, z, time);

    let gradient_x = (band.height(x + GRADIENT_STEP, z, time)
        - band.height(x - GRADIENT_STEP, z, time))
        / (2.0 * GRADIENT_STEP);
    let gradient_z = (band.height(x, z + GRADIENT_STEP, time)
        - band.height(x, z - GRADIENT_STEP, time))
        / (2.0 * GRADIENT_STEP);

    WaveSample {
        height,
        gradient_x,
        gradient_z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_sample_is_deterministic() {
        let band = WaveBand::default();
        let a = sample_wave(3.2, -1.7, 12.5, &band);
        let b = sample_wave(3.2, -1.7, 12.5, &band);
        assert_eq!(a, b, "Repeated samples of the same point must match");
    }

    #[test]
    fn test_zero_amplitude_collapses_field() {
        let band = WaveBand::default().with_amplitude(0.0);
        for &(x, z, t) in &[(0.0, 0.0, 0.0), (5.0, -3.0, 7.5), (-100.0, 42.0, 1e4)] {
            let sample = sample_wave(x, z, t, &band);
            assert_eq!(sample.height, 0.0);
            assert_eq!(sample.gradient_x, 0.0);
            assert_eq!(sample.gradient_z, 0.0);
        }
    }

    #[test]
    fn test_travelling_wave_period() {
        let band = WaveBand::default()
            .with_amplitude(1.0)
            .with_frequency(1.0, 1.0)
            .with_speed(1.0);
        let h0 = sample_wave(0.0, 0.0, 0.0, &band).height;
        let h1 = sample_wave(0.0, 0.0, TAU, &band).height;
        assert!(
            (h0 - h1).abs() < 1e-6,
            "Field should repeat with period 2*pi in x*fx + t*speed: {h0} vs {h1}"
        );
    }

    #[test]
    fn test_gradient_matches_analytic_slope() {
        // d/dx of sin(x) at the origin is cos(0) = 1; the finite-difference
        // estimate with step 0.01 must land within 1e-3 of it.
        let band = WaveBand::default()
            .with_amplitude(1.0)
            .with_frequency(1.0, 1.0)
            .with_speed(0.0);
        let sample = sample_wave(0.0, 0.0, 0.0, &band);
        assert!(sample.height.abs() < 1e-6);
        assert!((sample.gradient_x - 1.0).abs() < 1e-3);
        assert!((sample.gradient_z - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_gradient_scales_with_amplitude_and_frequency() {
        let band = WaveBand::default()
            .with_amplitude(2.0)
            .with_frequency(3.0, 1.0)
            .with_speed(0.0);
        // Slope at the origin is amplitude * fx * cos(0).
        let sample = sample_wave(0.0, 0.0, 0.0, &band);
        assert!((sample.gradient_x - 6.0).abs() < 1e-2);
    }

    #[test]
    fn test_degenerate_parameters_do_not_fault() {
        let band = WaveBand::default().with_frequency(0.0, -2.5).with_speed(-1.0);
        let sample = sample_wave(1.0, 1.0, 3.0, &band);
        assert!(sample.height.is_finite());
        assert!(sample.gradient_x.is_finite());
        assert!(sample.gradient_z.is_finite());
        // Zero frequency along x means no slope along x.
        assert!(sample.gradient_x.abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        let band = WaveBand::default();
        let sample = sample_wave(f32::NAN, 0.0, 0.0, &band);
        assert!(sample.height.is_nan());
        assert!(sample.gradient_x.is_nan());

        let sample = sample_wave(0.0, f32::INFINITY, 0.0, &band);
        assert!(!sample.height.is_finite());
    }
}
